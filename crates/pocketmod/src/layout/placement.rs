//! Page placement within cells
//!
//! Every source page is scaled by one uniform factor computed from the
//! first page, then centred in its cell. The margin factor over-scales the
//! page slightly so that the unprintable edge of a physical printer crops
//! page margin rather than page content.

use log::debug;

use super::{
    GridLayout, LayoutTemplate, PagePlacement, Rect, SheetLayout, Slot, SlotContent, cell_bounds,
    create_grid_layout,
};

/// Largest uniform scale that keeps the margin-inflated page inside a cell.
///
/// Taking the smaller of the two axis ratios preserves the aspect ratio and
/// lets the constrained axis overhang the cell by exactly `margin_factor`.
pub fn calculate_scale(
    source_width: f32,
    source_height: f32,
    cell_width: f32,
    cell_height: f32,
    margin_factor: f32,
) -> f32 {
    let scale_x = cell_width * margin_factor / source_width;
    let scale_y = cell_height * margin_factor / source_height;
    scale_x.min(scale_y)
}

/// Place one slot on the grid.
///
/// `source_size` is the first page size; `None` means the source has no
/// pages and the slot collapses to an empty rectangle at the cell origin.
pub fn place_slot(
    grid: &GridLayout,
    slot: &Slot,
    source_size: Option<(f32, f32)>,
    scale: f32,
    source_pages: usize,
) -> PagePlacement {
    let cell = cell_bounds(grid, slot.grid_pos);

    let content_rect = match source_size {
        Some((width, height)) => {
            let scaled_width = width * scale;
            let scaled_height = height * scale;
            Rect::new(
                cell.x + (cell.width - scaled_width) / 2.0,
                cell.y + (cell.height - scaled_height) / 2.0,
                scaled_width,
                scaled_height,
            )
        }
        None => Rect::new(cell.x, cell.y, 0.0, 0.0),
    };

    let content = if slot.source_index() < source_pages {
        SlotContent::Content(slot.source_index())
    } else {
        SlotContent::Blank
    };

    PagePlacement {
        slot: *slot,
        content,
        cell,
        content_rect,
        scale,
    }
}

/// Compute the placement of every slot in the template.
///
/// Only the first page is measured; all pages are assumed to share its size.
/// The template is expected to have passed `PocketModOptions::validate`;
/// slots outside the grid are clamped rather than rejected here.
pub fn build_layout(
    template: &LayoutTemplate,
    source_pages: usize,
    first_page_size: Option<(f32, f32)>,
    margin_factor: f32,
) -> SheetLayout {
    let grid = create_grid_layout(template);

    let source_size = first_page_size.filter(|_| source_pages > 0);
    let scale = match source_size {
        Some((width, height)) => calculate_scale(
            width,
            height,
            grid.cell_width_pt,
            grid.cell_height_pt,
            margin_factor,
        ),
        None => 1.0,
    };

    let placements: Vec<PagePlacement> = template
        .slots
        .iter()
        .map(|slot| {
            let placement = place_slot(&grid, slot, source_size, scale, source_pages);
            debug!(
                "Page {} ({}) -> Cell({},{}) at ({:.0},{:.0}), rotate {}°",
                slot.page_number,
                if placement.source_page().is_some() {
                    "content"
                } else {
                    "blank"
                },
                slot.grid_pos.row,
                slot.grid_pos.col,
                placement.content_rect.x,
                placement.content_rect.y,
                slot.rotation.degrees()
            );
            placement
        })
        .collect();

    SheetLayout {
        width_pt: template.sheet_width_pt,
        height_pt: template.sheet_height_pt,
        grid,
        source_pages,
        source_size,
        scale,
        placements,
    }
}
