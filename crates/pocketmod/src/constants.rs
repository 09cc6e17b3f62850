//! Shared constants for PocketMod layout
//!
//! This module centralizes the sheet geometry, margin calibration and
//! mark styling used throughout the layout and rendering code.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / POINTS_PER_MM
}

// =============================================================================
// Output Sheet
// =============================================================================

/// Output sheet width in points (US Letter landscape: 11")
pub const SHEET_WIDTH_PT: f32 = 792.0;

/// Output sheet height in points (US Letter landscape: 8.5")
pub const SHEET_HEIGHT_PT: f32 = 612.0;

/// Grid columns on the output sheet
pub const GRID_COLUMNS: usize = 4;

/// Grid rows on the output sheet
pub const GRID_ROWS: usize = 2;

/// Number of booklet pages on one sheet
pub const BOOKLET_PAGES: usize = GRID_COLUMNS * GRID_ROWS;

/// Fallback source page size (US Letter portrait) when no MediaBox is found
pub const DEFAULT_PAGE_DIMENSIONS: (f32, f32) = (612.0, 792.0);

// =============================================================================
// Margin Calibration
// =============================================================================

/// Over-scale applied to each page, calibrated by print tests for ~3mm margins
pub const DEFAULT_MARGIN_FACTOR: f32 = 1.020;

/// Margin factor at a 0mm print margin on the linear calibration line
pub const PRINT_MARGIN_BASE_FACTOR: f32 = 1.050;

/// Margin factor lost per millimeter of requested print margin
pub const PRINT_MARGIN_FACTOR_PER_MM: f32 = 0.010;

// =============================================================================
// Guide Marks
// =============================================================================

/// Line width for fold lines (points)
pub const FOLD_LINE_WIDTH: f32 = 0.5;

/// Dash pattern for fold lines: 6pt dash, 3pt gap
pub const FOLD_LINE_DASH: (f32, f32) = (6.0, 3.0);

/// Line width for the cut line (points)
pub const CUT_LINE_WIDTH: f32 = 0.5;

/// Gray level for guide marks (0 = black, 1 = white)
pub const GUIDE_GRAY: f32 = 0.6;
