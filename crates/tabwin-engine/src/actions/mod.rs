//! User-facing actions and what they produced.

use serde::{Deserialize, Serialize};
use tabwin_geom::Bounds;

use crate::{WindowId, WindowKind};

mod display;
mod neighbour;
mod window;

pub(crate) use display::tab_to_next_display;
pub(crate) use neighbour::tab_to_neighbour;
pub(crate) use window::tab_to_window;

/// An action the engine can run against the current tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Move the tab into a new window of the given kind.
    TabToWindow {
        /// Type of window to create.
        #[serde(default)]
        kind: WindowKind,
    },
    /// Move the tab into another normal window, `distance` steps away in
    /// window enumeration order (wrapping).
    TabToNeighbour {
        /// Signed step count; `1` is the next window, `-1` the previous.
        distance: i64,
    },
    /// Move the tab into a new window on the next display.
    TabToNextDisplay,
}

impl Action {
    pub const fn next_window() -> Self {
        Self::TabToNeighbour { distance: 1 }
    }

    pub const fn previous_window() -> Self {
        Self::TabToNeighbour { distance: -1 }
    }

    /// Short name used in logs.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::TabToWindow {
                kind: WindowKind::Normal,
            } => "tab-to-window",
            Self::TabToWindow {
                kind: WindowKind::Popup,
            } => "tab-to-popup",
            Self::TabToNeighbour { .. } => "tab-to-neighbour",
            Self::TabToNextDisplay => "tab-to-next-display",
        }
    }
}

/// Result of running an [`Action`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum Outcome {
    /// A new window now holds the tab.
    Created {
        /// The new window.
        window: WindowId,
        /// Bounds requested for the new window.
        bounds: Bounds,
        /// Bounds the original window was resized to, if it was.
        original_bounds: Option<Bounds>,
    },
    /// The tab moved into an existing window.
    Moved {
        /// The window that received the tab.
        window: WindowId,
    },
    /// Nothing to do: the tab already sits alone in a window of that kind.
    Unchanged,
}
