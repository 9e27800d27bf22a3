//! Error handling for the tabwin binary.

use std::{io, result};

use thiserror::Error;

/// Convenient result type for tabwin commands.
pub type Result<T> = result::Result<T, Error>;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum Error {
    /// Wrapper for standard I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// Rejected option set or option update.
    #[error("options error: {0}")]
    Options(#[from] tabwin_options::Error),
    /// The simulated action failed.
    #[error("engine error: {0}")]
    Engine(#[from] tabwin_engine::Error),
    /// Failure rendering JSON output.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// The scenario file could not be parsed.
    #[error("invalid scenario: {0}")]
    Scenario(String),
}

impl Error {
    /// Helper to build a scenario error from an arbitrary message.
    pub fn scenario<M: Into<String>>(msg: M) -> Self {
        Self::Scenario(msg.into())
    }
}
