//! Layout data types for PocketMod sheets
//!
//! These types represent the intermediate layout calculations between
//! the fixed slot table and PDF rendering. All coordinates are PDF user
//! space: origin at the bottom-left corner of the sheet, y growing upward.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Orientation of a page inside its cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SlotRotation {
    /// Drawn as in the source
    #[default]
    Upright,
    /// Turned 180° about the centre of its rectangle
    Inverted,
}

impl SlotRotation {
    pub fn degrees(self) -> i32 {
        match self {
            SlotRotation::Upright => 0,
            SlotRotation::Inverted => 180,
        }
    }
}

/// Position within the grid (row, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridPosition {
    /// Row index (0 = top row)
    pub row: usize,
    /// Column index (0 = leftmost column)
    pub col: usize,
}

impl GridPosition {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// One fixed cell of the booklet sheet
///
/// A slot ties a logical booklet page to a grid cell and the rotation it
/// must be drawn with so that it reads upright once the sheet is folded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Slot {
    /// Booklet page number (1-based)
    pub page_number: usize,
    /// Cell on the sheet
    pub grid_pos: GridPosition,
    /// How the page is turned within the cell
    pub rotation: SlotRotation,
}

impl Slot {
    pub const fn new(page_number: usize, row: usize, col: usize, rotation: SlotRotation) -> Self {
        Self {
            page_number,
            grid_pos: GridPosition::new(row, col),
            rotation,
        }
    }

    /// 0-based index of the source page this slot shows
    pub fn source_index(&self) -> usize {
        self.page_number.saturating_sub(1)
    }
}

/// What a slot displays, decided once when the layout is built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotContent {
    /// Source page at this 0-based index
    Content(usize),
    /// Nothing is drawn; the cell stays white
    Blank,
}

/// Sheet geometry and slot table for one layout
///
/// Passed explicitly into the layout function rather than read from
/// globals, so a different sheet or slot table needs no code changes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayoutTemplate {
    /// Sheet width in points
    pub sheet_width_pt: f32,
    /// Sheet height in points
    pub sheet_height_pt: f32,
    /// Number of columns in the grid
    pub columns: usize,
    /// Number of rows in the grid
    pub rows: usize,
    /// Slots in rendering order
    pub slots: Vec<Slot>,
}

impl LayoutTemplate {
    pub fn cell_width(&self) -> f32 {
        self.sheet_width_pt / self.columns as f32
    }

    pub fn cell_height(&self) -> f32 {
        self.sheet_height_pt / self.rows as f32
    }

    /// Maximum number of source pages the sheet can show
    pub fn page_capacity(&self) -> usize {
        self.slots.len()
    }
}

/// Uniform grid of cells covering the sheet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    /// Number of columns in the grid
    pub cols: usize,
    /// Number of rows in the grid
    pub rows: usize,
    /// Width of each cell in points
    pub cell_width_pt: f32,
    /// Height of each cell in points
    pub cell_height_pt: f32,
}

impl GridLayout {
    /// Total number of cells in the grid
    pub fn cell_count(&self) -> usize {
        self.cols * self.rows
    }
}

/// A rectangular area in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (bottom edge)
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge y coordinate
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// Center x coordinate
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Center y coordinate
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// Final placement of one slot on the output sheet
///
/// This is the result of all layout calculations and contains
/// everything needed to render the slot.
#[derive(Debug, Clone, PartialEq)]
pub struct PagePlacement {
    /// The slot this placement corresponds to
    pub slot: Slot,
    /// Source page or blank
    pub content: SlotContent,
    /// Bounds of the grid cell
    pub cell: Rect,
    /// Scaled page rectangle, centred in the cell (may overhang it)
    pub content_rect: Rect,
    /// Scale factor applied to the source page
    pub scale: f32,
}

impl PagePlacement {
    pub fn source_page(&self) -> Option<usize> {
        match self.content {
            SlotContent::Content(idx) => Some(idx),
            SlotContent::Blank => None,
        }
    }

    pub fn is_rotated(&self) -> bool {
        self.slot.rotation == SlotRotation::Inverted
    }
}

/// Complete layout of the output sheet
#[derive(Debug, Clone, PartialEq)]
pub struct SheetLayout {
    /// Sheet width in points
    pub width_pt: f32,
    /// Sheet height in points
    pub height_pt: f32,
    /// Cell grid
    pub grid: GridLayout,
    /// Pages in the source document
    pub source_pages: usize,
    /// First source page size in points, if the source has pages
    pub source_size: Option<(f32, f32)>,
    /// Uniform scale shared by every slot
    pub scale: f32,
    /// One placement per slot, in template order
    pub placements: Vec<PagePlacement>,
}

impl SheetLayout {
    /// Placements that draw a source page
    pub fn content_placements(&self) -> impl Iterator<Item = &PagePlacement> {
        self.placements
            .iter()
            .filter(|placement| placement.source_page().is_some())
    }
}
