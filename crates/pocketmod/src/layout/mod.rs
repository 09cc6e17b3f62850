//! Layout calculation modules for PocketMod sheets
//!
//! This module handles all the geometric calculations:
//! - Slot table (which booklet page goes where, and how it is turned)
//! - Grid layout (cell dimensions and bounds)
//! - Content placement (uniform scale, centring, blank slots)

mod grid;
mod placement;
mod slots;
mod types;

pub use grid::*;
pub use placement::*;
pub use slots::*;
pub use types::*;
