//! Window/display lookups shared by the action handlers.

use tabwin_geom::{Bounds, current_display};
use tracing::trace;

use crate::{DisplayInfo, Error, Result, WindowInfo};

/// A window's effective bounds and the display it mostly sits on.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Located {
    /// Window bounds with missing fields defaulted.
    pub bounds: Bounds,
    /// Index into the display list.
    pub display: usize,
}

/// Area used to default missing window sizes: the primary display's work area,
/// else the first display's.
pub(crate) fn avail_area(displays: &[DisplayInfo]) -> Result<&Bounds> {
    displays
        .iter()
        .find(|d| d.primary)
        .or_else(|| displays.first())
        .map(|d| &d.work_area)
        .ok_or(Error::NoDisplays)
}

/// Resolve a window's bounds and pick the display it overlaps most.
pub(crate) fn locate(window: &WindowInfo, displays: &[DisplayInfo]) -> Result<Located> {
    let bounds = window.bounds.or_defaults(avail_area(displays)?);
    let idx = current_display(&bounds, displays.iter().map(|d| &d.work_area))
        .ok_or(Error::NoDisplays)?;
    trace!(
        "locate: {} bounds={} display={}",
        window.id, bounds, displays[idx].id
    );
    Ok(Located {
        bounds,
        display: idx,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RawBounds, WindowId};

    fn displays() -> Vec<DisplayInfo> {
        vec![
            DisplayInfo {
                id: 10,
                work_area: Bounds::new(-1280.0, 0.0, 1280.0, 1024.0),
                primary: false,
            },
            DisplayInfo {
                id: 20,
                work_area: Bounds::new(0.0, 25.0, 1600.0, 875.0),
                primary: true,
            },
        ]
    }

    fn window(bounds: RawBounds) -> WindowInfo {
        WindowInfo {
            id: WindowId(1),
            kind: Default::default(),
            state: Default::default(),
            focused: true,
            bounds,
            tabs: vec![],
        }
    }

    #[test]
    fn avail_area_prefers_primary() {
        let ds = displays();
        assert_eq!(avail_area(&ds).unwrap().width, 1600.0);
        assert_eq!(avail_area(&ds[..1]).unwrap().width, 1280.0);
        assert!(matches!(avail_area(&[]), Err(Error::NoDisplays)));
    }

    #[test]
    fn locate_defaults_missing_bounds_to_primary_size() {
        let ds = displays();
        let loc = locate(&window(RawBounds::default()), &ds).unwrap();
        assert_eq!(loc.bounds, Bounds::new(0.0, 0.0, 1600.0, 875.0));
        assert_eq!(loc.display, 1);
    }

    #[test]
    fn locate_finds_secondary_display() {
        let ds = displays();
        let loc = locate(
            &window(Bounds::new(-1000.0, 100.0, 800.0, 600.0).into()),
            &ds,
        )
        .unwrap();
        assert_eq!(loc.display, 0);
    }
}
