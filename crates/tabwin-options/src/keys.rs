//! Option identifiers and their dynamically typed values.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tabwin_geom::{BoundsProp, WindowKey};

use crate::Error;

/// Identifier of a single stored option.
///
/// String forms are kebab-case: `original-width` .. `new-top`, `clone-mode`,
/// `focus`, `resize-original`, `copy-fullscreen`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OptionKey {
    /// One of the eight normalized ratios.
    Ratio(WindowKey, BoundsProp),
    /// How the new window derives its bounds from the original.
    CloneMode,
    /// Which window ends up focused after the move.
    Focus,
    /// Whether the original window is resized to its own ratios.
    ResizeOriginal,
    /// Whether a maximized/fullscreen original makes the new window match.
    CopyFullscreen,
}

impl OptionKey {
    /// Every key, ratios first in window-major order.
    pub const ALL: [Self; 12] = [
        Self::Ratio(WindowKey::Original, BoundsProp::Width),
        Self::Ratio(WindowKey::Original, BoundsProp::Height),
        Self::Ratio(WindowKey::Original, BoundsProp::Left),
        Self::Ratio(WindowKey::Original, BoundsProp::Top),
        Self::Ratio(WindowKey::New, BoundsProp::Width),
        Self::Ratio(WindowKey::New, BoundsProp::Height),
        Self::Ratio(WindowKey::New, BoundsProp::Left),
        Self::Ratio(WindowKey::New, BoundsProp::Top),
        Self::CloneMode,
        Self::Focus,
        Self::ResizeOriginal,
        Self::CopyFullscreen,
    ];

    pub const fn name(self) -> &'static str {
        use BoundsProp::{Height, Left, Top, Width};
        use WindowKey::{New, Original};
        match self {
            Self::Ratio(Original, Width) => "original-width",
            Self::Ratio(Original, Height) => "original-height",
            Self::Ratio(Original, Left) => "original-left",
            Self::Ratio(Original, Top) => "original-top",
            Self::Ratio(New, Width) => "new-width",
            Self::Ratio(New, Height) => "new-height",
            Self::Ratio(New, Left) => "new-left",
            Self::Ratio(New, Top) => "new-top",
            Self::CloneMode => "clone-mode",
            Self::Focus => "focus",
            Self::ResizeOriginal => "resize-original",
            Self::CopyFullscreen => "copy-fullscreen",
        }
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OptionKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| Error::UnknownKey(s.to_string()))
    }
}

/// A stored option value as read from or written to the store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl OptionValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<f64> for OptionValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for OptionValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for OptionValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}
