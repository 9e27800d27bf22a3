use tabwin_geom::{WindowKey, next_display, resolve};
use tabwin_options::Options;
use tracing::{debug, info};

use super::Outcome;
use crate::{BrowserApi, CreateWindow, Error, Result, UpdateWindow, WindowKind, place::locate};

/// Move the current tab into a new normal window on the display after the one
/// its window currently occupies.
pub(crate) async fn tab_to_next_display(
    browser: &dyn BrowserApi,
    opts: &Options,
) -> Result<Outcome> {
    let tab = browser.current_tab().await?;
    let (window, displays) = tokio::try_join!(browser.window(tab.window), browser.displays())?;

    let loc = locate(&window, &displays)?;
    let next = next_display(loc.display, displays.len())
        .filter(|n| *n != loc.display)
        .ok_or(Error::NoOtherDisplay)?;
    let area = displays[next].work_area;
    let copy_state = opts.copy_fullscreen && window.state.fills_display();
    let bounds = if copy_state {
        area
    } else {
        resolve(opts, WindowKey::New, &area)
    };
    debug!(
        "tab_to_next_display: display {} -> {} bounds={}",
        displays[loc.display].id, displays[next].id, bounds
    );

    let focus_new = opts.focus == WindowKey::New;
    let created = browser
        .create_window(CreateWindow {
            tab: tab.id,
            kind: WindowKind::Normal,
            bounds: Some(bounds),
            focused: focus_new,
        })
        .await?;
    if copy_state {
        browser
            .update_window(created.id, UpdateWindow::state(window.state))
            .await?;
    }
    if !focus_new && window.tabs.len() > 1 {
        browser
            .update_window(window.id, UpdateWindow::focus())
            .await?;
    }
    info!("tab_to_next_display: {} -> {}", tab.id, created.id);
    Ok(Outcome::Created {
        window: created.id,
        bounds,
        original_bounds: None,
    })
}
