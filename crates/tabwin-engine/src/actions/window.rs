use tabwin_geom::{WindowKey, clone_bounds, resolve};
use tabwin_options::Options;
use tracing::{debug, info};

use super::Outcome;
use crate::{BrowserApi, CreateWindow, Result, UpdateWindow, WindowKind, place::locate};

/// Move the current tab into a new window of `kind`.
///
/// Order of browser calls: resize the original (when enabled and it keeps
/// other tabs), create the new window, then hand focus back to the original if
/// requested.
pub(crate) async fn tab_to_window(
    browser: &dyn BrowserApi,
    opts: &Options,
    kind: WindowKind,
) -> Result<Outcome> {
    let tab = browser.current_tab().await?;
    let (window, displays) = tokio::try_join!(browser.window(tab.window), browser.displays())?;

    if window.tabs.len() <= 1 && window.kind == kind {
        debug!("tab_to_window: {} is alone in {}, nothing to do", tab.id, window.id);
        return Ok(Outcome::Unchanged);
    }

    let loc = locate(&window, &displays)?;
    let area = displays[loc.display].work_area;
    let focus_new = opts.focus == WindowKey::New;
    // The browser closes a window once its last tab leaves.
    let original_survives = window.tabs.len() > 1;
    let refocus_original = !focus_new && original_survives;

    if opts.copy_fullscreen && window.state.fills_display() {
        // Land on the same display first, then take on the original's state.
        let created = browser
            .create_window(CreateWindow {
                tab: tab.id,
                kind,
                bounds: Some(area),
                focused: focus_new,
            })
            .await?;
        browser
            .update_window(created.id, UpdateWindow::state(window.state))
            .await?;
        if refocus_original {
            browser
                .update_window(window.id, UpdateWindow::focus())
                .await?;
        }
        info!(
            "tab_to_window: {} -> {} ({:?}, copied {:?})",
            tab.id, created.id, kind, window.state
        );
        return Ok(Outcome::Created {
            window: created.id,
            bounds: area,
            original_bounds: None,
        });
    }

    let original_bounds = if opts.resize_original && original_survives {
        let target = resolve(opts, WindowKey::Original, &area);
        browser
            .update_window(window.id, UpdateWindow::bounds(target))
            .await?;
        Some(target)
    } else {
        None
    };

    let bounds = if opts.clone_mode.is_enabled() {
        let source = original_bounds.unwrap_or(loc.bounds);
        clone_bounds(&source, &area, opts.clone_mode)
    } else {
        resolve(opts, WindowKey::New, &area)
    };
    debug!(
        "tab_to_window: display={} original={:?} new={} mode={}",
        area, original_bounds, bounds, opts.clone_mode
    );

    let created = browser
        .create_window(CreateWindow {
            tab: tab.id,
            kind,
            bounds: Some(bounds),
            focused: focus_new,
        })
        .await?;
    if refocus_original {
        browser
            .update_window(window.id, UpdateWindow::focus())
            .await?;
    }
    info!("tab_to_window: {} -> {} ({:?})", tab.id, created.id, kind);
    Ok(Outcome::Created {
        window: created.id,
        bounds,
        original_bounds,
    })
}
