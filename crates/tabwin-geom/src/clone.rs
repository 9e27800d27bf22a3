//! Placement of a second window next to an existing one.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::bounds::{Axis, Bounds};

/// Strategy for deriving the new window's bounds from the original window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CloneMode {
    /// Cloning disabled; the new window uses its own ratios.
    #[default]
    #[serde(rename = "clone-mode-no")]
    No,
    /// Exact copy of the original bounds.
    #[serde(rename = "clone-mode-same")]
    Same,
    /// Best fit beside the original along the horizontal axis.
    #[serde(rename = "clone-mode-horizontal")]
    Horizontal,
    /// Best fit above or below the original along the vertical axis.
    #[serde(rename = "clone-mode-vertical")]
    Vertical,
}

impl CloneMode {
    pub const ALL: [Self; 4] = [Self::No, Self::Same, Self::Horizontal, Self::Vertical];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::No => "clone-mode-no",
            Self::Same => "clone-mode-same",
            Self::Horizontal => "clone-mode-horizontal",
            Self::Vertical => "clone-mode-vertical",
        }
    }

    /// Whether a new window should be derived from the original at all.
    pub const fn is_enabled(self) -> bool {
        !matches!(self, Self::No)
    }
}

impl fmt::Display for CloneMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An unrecognized clone mode string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown clone mode '{0}'")]
pub struct ParseCloneModeError(pub String);

impl FromStr for CloneMode {
    type Err = ParseCloneModeError;

    /// Accepts the full `clone-mode-*` identifiers and their bare suffixes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bare = s.strip_prefix("clone-mode-").unwrap_or(s);
        match bare {
            "no" => Ok(Self::No),
            "same" => Ok(Self::Same),
            "horizontal" => Ok(Self::Horizontal),
            "vertical" => Ok(Self::Vertical),
            _ => Err(ParseCloneModeError(s.to_string())),
        }
    }
}

/// Place a window of `win_len` at `win_pos` next to itself inside a display
/// spanning `display_pos..display_pos + display_len`.
///
/// Returns the clone's `(pos, len)`. The trailing gap wins when the clone fits
/// there outright or when it is strictly larger than the leading gap, so a
/// centered window whose clone fits goes to the trailing side. The length is
/// capped by both the window's own length and the chosen gap, and is not
/// clamped at zero.
pub fn best_fit(win_pos: f64, win_len: f64, display_pos: f64, display_len: f64) -> (f64, f64) {
    let norm_pos = win_pos - display_pos;
    let opposite_edge = norm_pos + win_len;
    let opposite_gap = display_len - opposite_edge;
    let does_fit = win_len <= opposite_gap;
    if does_fit || norm_pos < opposite_gap {
        (display_pos + opposite_edge, win_len.min(opposite_gap))
    } else {
        let len = win_len.min(norm_pos);
        (win_pos - len, len)
    }
}

/// Compute bounds for a window cloned from `source` on `display`.
///
/// `Same` and `No` both return `source` untouched; callers gate on
/// [`CloneMode::is_enabled`] before asking for a clone.
pub fn clone_bounds(source: &Bounds, display: &Bounds, mode: CloneMode) -> Bounds {
    let axis = match mode {
        CloneMode::Horizontal => Axis::Horizontal,
        CloneMode::Vertical => Axis::Vertical,
        CloneMode::Same | CloneMode::No => return *source,
    };
    let (win_pos, win_len) = source.span(axis);
    let (display_pos, display_len) = display.span(axis);
    let (pos, len) = best_fit(win_pos, win_len, display_pos, display_len);
    source.with_span(axis, pos, len)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DISPLAY: Bounds = Bounds::new(0.0, 0.0, 1600.0, 900.0);

    #[test]
    fn horizontal_left_window_clones_to_the_right() {
        let src = Bounds::new(0.0, 0.0, 400.0, 800.0);
        assert_eq!(
            clone_bounds(&src, &DISPLAY, CloneMode::Horizontal),
            Bounds::new(400.0, 0.0, 400.0, 800.0)
        );
    }

    #[test]
    fn horizontal_right_window_clones_to_the_left() {
        let src = Bounds::new(1200.0, 0.0, 400.0, 800.0);
        assert_eq!(
            clone_bounds(&src, &DISPLAY, CloneMode::Horizontal),
            Bounds::new(800.0, 0.0, 400.0, 800.0)
        );
    }

    #[test]
    fn vertical_uses_top_and_height() {
        let src = Bounds::new(100.0, 0.0, 400.0, 300.0);
        assert_eq!(
            clone_bounds(&src, &DISPLAY, CloneMode::Vertical),
            Bounds::new(100.0, 300.0, 400.0, 300.0)
        );
        let low = Bounds::new(100.0, 600.0, 400.0, 300.0);
        assert_eq!(
            clone_bounds(&low, &DISPLAY, CloneMode::Vertical),
            Bounds::new(100.0, 300.0, 400.0, 300.0)
        );
    }

    #[test]
    fn shrinks_into_the_larger_gap() {
        // 1000 wide at 400: leading gap 400, trailing gap 200.
        let src = Bounds::new(400.0, 0.0, 1000.0, 900.0);
        assert_eq!(
            clone_bounds(&src, &DISPLAY, CloneMode::Horizontal),
            Bounds::new(0.0, 0.0, 400.0, 900.0)
        );
        // 1000 wide at 100: leading gap 100, trailing gap 500.
        let src = Bounds::new(100.0, 0.0, 1000.0, 900.0);
        assert_eq!(
            clone_bounds(&src, &DISPLAY, CloneMode::Horizontal),
            Bounds::new(1100.0, 0.0, 500.0, 900.0)
        );
    }

    #[test]
    fn centered_window_prefers_trailing_side_when_it_fits() {
        let src = Bounds::new(600.0, 0.0, 400.0, 900.0);
        assert_eq!(
            clone_bounds(&src, &DISPLAY, CloneMode::Horizontal),
            Bounds::new(1000.0, 0.0, 400.0, 900.0)
        );
    }

    #[test]
    fn equal_gaps_without_fit_take_the_leading_side() {
        // gaps of 300 on both sides, a 1000 wide clone fits neither
        let src = Bounds::new(300.0, 0.0, 1000.0, 900.0);
        assert_eq!(
            clone_bounds(&src, &DISPLAY, CloneMode::Horizontal),
            Bounds::new(0.0, 0.0, 300.0, 900.0)
        );
    }

    #[test]
    fn respects_display_origin() {
        let display = Bounds::new(1600.0, 0.0, 1920.0, 1080.0);
        let src = Bounds::new(2560.0, 0.0, 960.0, 1080.0);
        assert_eq!(
            clone_bounds(&src, &display, CloneMode::Horizontal),
            Bounds::new(1600.0, 0.0, 960.0, 1080.0)
        );
    }

    #[test]
    fn oversized_window_yields_negative_length() {
        // window hangs past both edges: leading gap -100, trailing gap -100
        let src = Bounds::new(-100.0, 0.0, 1800.0, 900.0);
        let (pos, len) = best_fit(src.left, src.width, DISPLAY.left, DISPLAY.width);
        assert_eq!((pos, len), (0.0, -100.0));
    }

    #[test]
    fn same_and_no_are_pass_through() {
        let src = Bounds::new(12.0, 34.0, 56.0, 78.0);
        assert_eq!(clone_bounds(&src, &DISPLAY, CloneMode::Same), src);
        assert_eq!(clone_bounds(&src, &DISPLAY, CloneMode::No), src);
    }

    #[test]
    fn parses_full_and_bare_names() {
        for mode in CloneMode::ALL {
            assert_eq!(mode.as_str().parse::<CloneMode>(), Ok(mode));
        }
        assert_eq!("vertical".parse::<CloneMode>(), Ok(CloneMode::Vertical));
        assert_eq!(
            "clone-mode-diagonal".parse::<CloneMode>(),
            Err(ParseCloneModeError("clone-mode-diagonal".into()))
        );
        assert!(!CloneMode::No.is_enabled());
        assert!(CloneMode::Same.is_enabled());
    }
}
