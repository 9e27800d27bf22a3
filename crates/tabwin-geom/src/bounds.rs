// Rectangle primitive shared by every geometry helper.
// Fields follow the browser window model: origin at top-left, y grows downward.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A window or display rectangle in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    #[inline]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Position and length of this rectangle along `axis`.
    #[inline]
    pub fn span(&self, axis: Axis) -> (f64, f64) {
        match axis {
            Axis::Horizontal => (self.left, self.width),
            Axis::Vertical => (self.top, self.height),
        }
    }

    /// Copy of `self` with the `axis` position and length replaced.
    #[inline]
    #[must_use]
    pub fn with_span(self, axis: Axis, pos: f64, len: f64) -> Self {
        match axis {
            Axis::Horizontal => Self {
                left: pos,
                width: len,
                ..self
            },
            Axis::Vertical => Self {
                top: pos,
                height: len,
                ..self
            },
        }
    }

    /// Area shared by `self` and `other`; zero when they do not touch.
    #[inline]
    pub fn intersection_area(&self, other: &Self) -> f64 {
        overlap_1d(self.left, self.right(), other.left, other.right())
            * overlap_1d(self.top, self.bottom(), other.top, other.bottom())
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.left, self.top, self.width, self.height
        )
    }
}

/// Failure to read a `left,top,width,height` string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseBoundsError {
    /// The string did not contain exactly four comma-separated fields.
    #[error("expected 4 comma-separated numbers, got {0}")]
    FieldCount(usize),
    /// One of the fields was not a number.
    #[error("invalid number '{0}'")]
    Number(String),
}

impl FromStr for Bounds {
    type Err = ParseBoundsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(ParseBoundsError::FieldCount(parts.len()));
        }
        let mut vals = [0.0f64; 4];
        for (slot, part) in vals.iter_mut().zip(&parts) {
            *slot = part
                .parse::<f64>()
                .map_err(|_| ParseBoundsError::Number((*part).to_string()))?;
        }
        Ok(Self::new(vals[0], vals[1], vals[2], vals[3]))
    }
}

/// Axis along which a one-dimensional placement operates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// The `left`/`width` pair.
    Horizontal,
    /// The `top`/`height` pair.
    Vertical,
}

/// Length of the overlap between `[a1, a2]` and `[b1, b2]`, never negative.
#[inline]
pub fn overlap_1d(a1: f64, a2: f64, b1: f64, b2: f64) -> f64 {
    let l = a1.max(b1);
    let r = a2.min(b2);
    (r - l).max(0.0)
}

/// Round half toward positive infinity, matching browser `Math.round`.
#[inline]
pub fn round_half_up(v: f64) -> f64 {
    let f = v.floor();
    if v - f >= 0.5 { f + 1.0 } else { f }
}
