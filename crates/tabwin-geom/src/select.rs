//! Index selection over display and window lists.

use crate::bounds::Bounds;

/// Index of the display sharing the largest area with `window`.
///
/// Starts from the first display and only switches on a strictly larger
/// overlap, so ties (including "overlaps nothing") resolve to the earliest
/// display. Returns `None` only for an empty list.
pub fn current_display<'a, I>(window: &Bounds, displays: I) -> Option<usize>
where
    I: IntoIterator<Item = &'a Bounds>,
{
    let mut best: Option<(usize, f64)> = None;
    for (i, display) in displays.into_iter().enumerate() {
        let area = window.intersection_area(display);
        match best {
            Some((_, best_area)) if area <= best_area => {}
            _ => best = Some((i, area)),
        }
    }
    best.map(|(i, _)| i)
}

/// Cyclic successor of `current` in a list of `count` displays.
pub fn next_display(current: usize, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    Some((current + 1) % count)
}

/// Window `distance` steps away from `current` in a list of `count` windows,
/// wrapping in both directions.
///
/// A `current` of `None` (the window is not in the list, e.g. a popup) counts
/// as index 0. Returns `None` when the wrapped index lands back on the
/// current one, which covers single-window lists and distances that are a
/// multiple of `count`.
pub fn neighbour_index(current: Option<usize>, distance: i64, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let max = count as i64;
    let cur = current.map_or(0, |c| c as i64);
    // Reduce first; both terms are then below `max`.
    let target = wrap(cur + wrap(distance, max), max);
    (target != cur).then_some(target as usize)
}

/// `((i % max) + max) % max`
#[inline]
fn wrap(i: i64, max: i64) -> i64 {
    i.rem_euclid(max)
}
