//! tabwin engine
//!
//! Runs tab/window actions against a browser:
//! - reads the option set from an [`OptionsStore`]
//! - reads window and display state through [`BrowserApi`]
//! - computes target bounds with `tabwin-geom`
//! - issues the window create/update and tab move calls
//!
//! [`SimBrowser`] is an in-memory [`BrowserApi`] for tests and dry runs.
use std::sync::Arc;

use tabwin_options::OptionsStore;
use tracing::{info, warn};

mod actions;
mod browser;
mod error;
mod place;
mod sim;

pub use actions::{Action, Outcome};
pub use browser::{
    BrowserApi, CreateWindow, DisplayInfo, RawBounds, TabId, TabInfo, UpdateWindow, WindowId,
    WindowInfo, WindowKind, WindowState,
};
pub use error::{Error, Result};
pub use sim::{SimBrowser, SimSetup};

/// Engine couples a browser with an options store and runs [`Action`]s.
///
/// Options are snapshotted once per action so a concurrent options edit never
/// mixes two option sets in one placement.
#[derive(Clone)]
pub struct Engine {
    /// Browser the actions operate on.
    browser: Arc<dyn BrowserApi>,
    /// Source of window ratios and behaviour toggles.
    options: Arc<dyn OptionsStore>,
}

impl Engine {
    /// Create a new engine.
    pub fn new(browser: Arc<dyn BrowserApi>, options: Arc<dyn OptionsStore>) -> Self {
        Self { browser, options }
    }

    /// Run `action` against the current tab.
    pub async fn run(&self, action: Action) -> Result<Outcome> {
        let opts = self.options.snapshot();
        let browser = self.browser.as_ref();
        info!("run: {}", action.name());
        let res = match action {
            Action::TabToWindow { kind } => actions::tab_to_window(browser, &opts, kind).await,
            Action::TabToNeighbour { distance } => {
                actions::tab_to_neighbour(browser, &opts, distance).await
            }
            Action::TabToNextDisplay => actions::tab_to_next_display(browser, &opts).await,
        };
        if let Err(e) = &res {
            warn!("run: {} failed: {}", action.name(), e);
        }
        res
    }
}
