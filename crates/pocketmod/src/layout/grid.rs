//! Grid layout calculation
//!
//! This module handles the geometric layout of the cell grid on a sheet.

use super::{GridLayout, GridPosition, LayoutTemplate, Rect};

/// Create the cell grid described by a template.
pub fn create_grid_layout(template: &LayoutTemplate) -> GridLayout {
    GridLayout {
        cols: template.columns,
        rows: template.rows,
        cell_width_pt: template.cell_width(),
        cell_height_pt: template.cell_height(),
    }
}

/// Calculate the bounds of a cell at the given grid position.
///
/// Row 0 is the top of the sheet, so the y coordinate is flipped into
/// PDF user space where the origin is the bottom-left corner. Rows past the
/// bottom of the grid clamp to the bottom row; `PocketModOptions::validate`
/// rejects such templates before rendering.
pub fn cell_bounds(grid: &GridLayout, pos: GridPosition) -> Rect {
    let cell_x = pos.col as f32 * grid.cell_width_pt;
    let rows_below = grid.rows.saturating_sub(pos.row).saturating_sub(1);
    let cell_y = rows_below as f32 * grid.cell_height_pt;

    Rect::new(cell_x, cell_y, grid.cell_width_pt, grid.cell_height_pt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pocketmod_grid() {
        let grid = create_grid_layout(&LayoutTemplate::pocketmod_letter());

        assert_eq!(grid.cols, 4);
        assert_eq!(grid.rows, 2);
        assert_eq!(grid.cell_width_pt, 198.0);
        assert_eq!(grid.cell_height_pt, 306.0);
        assert_eq!(grid.cell_count(), 8);
    }

    #[test]
    fn test_cell_bounds() {
        let grid = create_grid_layout(&LayoutTemplate::pocketmod_letter());

        // Top-left cell sits on the upper half of the sheet
        let bounds = cell_bounds(&grid, GridPosition::new(0, 0));
        assert_eq!(bounds, Rect::new(0.0, 306.0, 198.0, 306.0));

        // Bottom-right cell touches the sheet origin row
        let bounds = cell_bounds(&grid, GridPosition::new(1, 3));
        assert_eq!(bounds, Rect::new(594.0, 0.0, 198.0, 306.0));
        assert_eq!(bounds.right(), 792.0);
    }

    #[test]
    fn test_row_outside_grid_clamps() {
        let grid = create_grid_layout(&LayoutTemplate::pocketmod_letter());

        let bounds = cell_bounds(&grid, GridPosition::new(5, 0));
        assert_eq!(bounds, Rect::new(0.0, 0.0, 198.0, 306.0));
    }
}
