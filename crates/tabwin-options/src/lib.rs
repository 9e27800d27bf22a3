//! Option storage for tabwin: the eight normalized window ratios plus the
//! clone, focus, resize and fullscreen toggles.
//!
//! Values are validated and clamped here, at the store boundary, so the
//! geometry crate can take them as plain numbers.
#![warn(missing_docs)]

mod error;
mod keys;
mod options;
mod store;

pub use error::{Error, Result};
pub use keys::{OptionKey, OptionValue};
pub use options::Options;
pub use store::{MemoryStore, OptionsExt, OptionsStore};
