//! Error types for reading and updating options.

use std::result::Result as StdResult;

use thiserror::Error;

use crate::OptionKey;

/// Convenient result type for the options crate.
pub type Result<T> = StdResult<T, Error>;

/// Errors produced when an option update or import is rejected.
#[derive(Debug, Error)]
pub enum Error {
    /// The key name does not match any known option.
    #[error("unknown option '{0}'")]
    UnknownKey(String),

    /// The value has the wrong type for the key.
    #[error("option '{key}' expects a {expected} value")]
    TypeMismatch {
        /// Option being updated.
        key: OptionKey,
        /// Human-readable expected type.
        expected: &'static str,
    },

    /// A ratio update carried NaN or an infinity.
    #[error("option '{0}' must be a finite number")]
    NotFinite(OptionKey),

    /// The clone mode string was not recognized.
    #[error("invalid clone mode: {0}")]
    InvalidCloneMode(#[from] tabwin_geom::ParseCloneModeError),

    /// The focus target was neither `original` nor `new`.
    #[error("invalid focus target '{0}' (expected original|new)")]
    InvalidFocus(String),

    /// Malformed JSON while importing an option set.
    #[error("invalid options JSON: {0}")]
    Json(#[from] serde_json::Error),
}
