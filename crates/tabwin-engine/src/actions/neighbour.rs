use tabwin_geom::{WindowKey, neighbour_index};
use tabwin_options::Options;
use tracing::{debug, info};

use super::Outcome;
use crate::{BrowserApi, Error, Result, UpdateWindow, WindowKind};

/// Move the current tab into the normal window `distance` steps away.
///
/// Popups are skipped when counting; a tab sitting in a popup counts from the
/// first normal window.
pub(crate) async fn tab_to_neighbour(
    browser: &dyn BrowserApi,
    opts: &Options,
    distance: i64,
) -> Result<Outcome> {
    let (tab, windows) = tokio::try_join!(browser.current_tab(), browser.windows())?;
    let normals: Vec<_> = windows
        .iter()
        .filter(|w| w.kind == WindowKind::Normal)
        .map(|w| w.id)
        .collect();
    let current = normals.iter().position(|id| *id == tab.window);
    let target = neighbour_index(current, distance, normals.len())
        .and_then(|i| normals.get(i).copied())
        .ok_or(Error::NoNeighbourWindow)?;
    debug!(
        "tab_to_neighbour: {} at {:?} of {} normal windows, distance {} -> {}",
        tab.id,
        current,
        normals.len(),
        distance,
        target
    );

    browser.move_tab(tab.id, target).await?;
    browser.activate_tab(tab.id).await?;
    if opts.focus == WindowKey::New {
        browser.update_window(target, UpdateWindow::focus()).await?;
    }
    info!("tab_to_neighbour: {} -> {}", tab.id, target);
    Ok(Outcome::Moved { window: target })
}
