//! The browser seam: typed records and the async operations the engine needs.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tabwin_geom::Bounds;

use crate::Result;

/// Browser window identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(pub u32);

/// Browser tab identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(pub u32);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "window#{}", self.0)
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tab#{}", self.0)
    }
}

/// Window type as understood by the browser.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowKind {
    #[default]
    Normal,
    Popup,
}

/// Window presentation state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowState {
    #[default]
    Normal,
    Minimized,
    Maximized,
    Fullscreen,
}

impl WindowState {
    /// States that cover the whole display and are carried over to new windows.
    pub const fn fills_display(self) -> bool {
        matches!(self, Self::Maximized | Self::Fullscreen)
    }
}

/// Window bounds as reported by the browser, where any field may be missing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawBounds {
    #[serde(default)]
    pub left: Option<f64>,
    #[serde(default)]
    pub top: Option<f64>,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
}

impl RawBounds {
    /// Fill missing fields: positions become 0, sizes come from `avail`.
    pub fn or_defaults(&self, avail: &Bounds) -> Bounds {
        Bounds {
            left: self.left.unwrap_or(0.0),
            top: self.top.unwrap_or(0.0),
            width: self.width.unwrap_or(avail.width),
            height: self.height.unwrap_or(avail.height),
        }
    }
}

impl From<Bounds> for RawBounds {
    fn from(b: Bounds) -> Self {
        Self {
            left: Some(b.left),
            top: Some(b.top),
            width: Some(b.width),
            height: Some(b.height),
        }
    }
}

/// Snapshot of one browser window.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WindowInfo {
    pub id: WindowId,
    #[serde(default)]
    pub kind: WindowKind,
    #[serde(default)]
    pub state: WindowState,
    #[serde(default)]
    pub focused: bool,
    #[serde(default)]
    pub bounds: RawBounds,
    /// Tabs in strip order.
    #[serde(default)]
    pub tabs: Vec<TabId>,
}

/// Snapshot of one tab.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TabInfo {
    pub id: TabId,
    pub window: WindowId,
    #[serde(default)]
    pub index: usize,
    #[serde(default)]
    pub active: bool,
}

/// A physical display and the area windows may occupy on it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisplayInfo {
    pub id: u32,
    pub work_area: Bounds,
    #[serde(default)]
    pub primary: bool,
}

/// Request to open a new window around an existing tab.
#[derive(Clone, Debug, PartialEq)]
pub struct CreateWindow {
    /// Tab moved into the new window.
    pub tab: TabId,
    pub kind: WindowKind,
    pub bounds: Option<Bounds>,
    pub focused: bool,
}

/// Partial update of an existing window; `None` fields are left alone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateWindow {
    pub bounds: Option<Bounds>,
    pub state: Option<WindowState>,
    pub focused: Option<bool>,
}

impl UpdateWindow {
    pub fn bounds(bounds: Bounds) -> Self {
        Self {
            bounds: Some(bounds),
            ..Self::default()
        }
    }

    pub fn state(state: WindowState) -> Self {
        Self {
            state: Some(state),
            ..Self::default()
        }
    }

    pub fn focus() -> Self {
        Self {
            focused: Some(true),
            ..Self::default()
        }
    }
}

/// Browser operations used by the action handlers.
///
/// Every call is a single round trip to the browser. Implementations report
/// failures as [`crate::Error::Browser`] naming the operation.
#[async_trait]
pub trait BrowserApi: Send + Sync {
    /// The active tab of the last focused window.
    async fn current_tab(&self) -> Result<TabInfo>;

    async fn window(&self, id: WindowId) -> Result<WindowInfo>;

    /// All windows in the browser's enumeration order.
    async fn windows(&self) -> Result<Vec<WindowInfo>>;

    async fn displays(&self) -> Result<Vec<DisplayInfo>>;

    async fn create_window(&self, req: CreateWindow) -> Result<WindowInfo>;

    async fn update_window(&self, id: WindowId, req: UpdateWindow) -> Result<WindowInfo>;

    /// Move `tab` to the end of `window`'s tab strip.
    async fn move_tab(&self, tab: TabId, window: WindowId) -> Result<()>;

    async fn activate_tab(&self, tab: TabId) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_bounds_default_missing_fields() {
        let avail = Bounds::new(0.0, 0.0, 1440.0, 875.0);
        let raw = RawBounds {
            left: Some(100.0),
            top: None,
            width: None,
            height: Some(500.0),
        };
        assert_eq!(
            raw.or_defaults(&avail),
            Bounds::new(100.0, 0.0, 1440.0, 500.0)
        );
        assert_eq!(
            RawBounds::default().or_defaults(&avail),
            Bounds::new(0.0, 0.0, 1440.0, 875.0)
        );
    }

    #[test]
    fn fills_display_states() {
        assert!(WindowState::Maximized.fills_display());
        assert!(WindowState::Fullscreen.fills_display());
        assert!(!WindowState::Minimized.fills_display());
        assert!(!WindowState::Normal.fills_display());
    }
}
