//! Pure window geometry for moving tabs into new windows.
//!
//! Everything here is synchronous arithmetic over [`Bounds`] values:
//! - [`resolve`]: turn normalized ratios into pixel bounds on a display
//! - [`clone_bounds`]: place a second window beside an existing one
//! - [`current_display`], [`next_display`], [`neighbour_index`]: list selection
//!
//! Nothing in this crate validates or clamps its inputs. Out-of-range ratios
//! and degenerate rectangles flow through the arithmetic unchanged.
#![warn(missing_docs)]

mod bounds;
mod clone;
mod resolve;
mod select;


pub use bounds::{Axis, Bounds, ParseBoundsError, overlap_1d, round_half_up};
pub use clone::{CloneMode, ParseCloneModeError, best_fit, clone_bounds};
pub use resolve::{BoundsProp, NormalizedRect, NormalizedWindowSpec, RatioSource, WindowKey, resolve};
pub use select::{current_display, neighbour_index, next_display};
