//! The PocketMod slot table
//!
//! Folding a PocketMod puts the top row of the sheet on the far side of
//! the horizontal fold, so those pages are printed upside down:
//!
//! ```text
//! TOP ROW:    [5 ↻] [4 ↻] [3 ↻] [2 ↻]
//! BOTTOM ROW: [6]   [7]   [8]   [1]
//! ```

use crate::constants::{GRID_COLUMNS, GRID_ROWS, SHEET_HEIGHT_PT, SHEET_WIDTH_PT};

use super::{LayoutTemplate, Slot, SlotRotation};

/// Slots in rendering order: top row left to right, then bottom row
pub const POCKETMOD_SLOTS: [Slot; 8] = [
    Slot::new(5, 0, 0, SlotRotation::Inverted),
    Slot::new(4, 0, 1, SlotRotation::Inverted),
    Slot::new(3, 0, 2, SlotRotation::Inverted),
    Slot::new(2, 0, 3, SlotRotation::Inverted),
    Slot::new(6, 1, 0, SlotRotation::Upright),
    Slot::new(7, 1, 1, SlotRotation::Upright),
    Slot::new(8, 1, 2, SlotRotation::Upright),
    Slot::new(1, 1, 3, SlotRotation::Upright),
];

impl LayoutTemplate {
    /// PocketMod on a Letter landscape sheet (792 × 612 pt, 4 × 2 cells)
    pub fn pocketmod_letter() -> Self {
        Self {
            sheet_width_pt: SHEET_WIDTH_PT,
            sheet_height_pt: SHEET_HEIGHT_PT,
            columns: GRID_COLUMNS,
            rows: GRID_ROWS,
            slots: POCKETMOD_SLOTS.to_vec(),
        }
    }
}

impl Default for LayoutTemplate {
    fn default() -> Self {
        Self::pocketmod_letter()
    }
}
