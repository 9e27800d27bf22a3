use std::result::Result as StdResult;

use thiserror::Error;

use crate::{TabId, WindowId};

/// Convenient result type for the engine crate.
pub type Result<T> = StdResult<T, Error>;

/// Unified error type for the tabwin engine.
#[derive(Debug, Error)]
pub enum Error {
    /// A browser call failed.
    #[error("browser {op} failed: {message}")]
    Browser {
        /// Name of the failing browser operation.
        op: &'static str,
        /// Message reported by the browser.
        message: String,
    },

    /// The browser reported no displays at all.
    #[error("no displays available")]
    NoDisplays,

    /// Moving to the next display needs at least two displays.
    #[error("no other display to move to")]
    NoOtherDisplay,

    /// There is no other normal window to move the tab into.
    #[error("no neighbouring window")]
    NoNeighbourWindow,

    /// The referenced window does not exist (anymore).
    #[error("{0} not found")]
    WindowNotFound(WindowId),

    /// The referenced tab does not exist (anymore).
    #[error("{0} not found")]
    TabNotFound(TabId),

    /// No tab is active in any window.
    #[error("no active tab")]
    NoActiveTab,
}

impl Error {
    /// Helper to build a browser error from an arbitrary message.
    pub fn browser<M: Into<String>>(op: &'static str, msg: M) -> Self {
        Self::Browser {
            op,
            message: msg.into(),
        }
    }
}
