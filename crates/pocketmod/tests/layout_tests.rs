use pocketmod::layout::*;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

fn letter_layout(pages: usize, size: (f32, f32), margin_factor: f32) -> SheetLayout {
    build_layout(
        &LayoutTemplate::pocketmod_letter(),
        pages,
        Some(size),
        margin_factor,
    )
}

#[test]
fn test_full_layout_positions() {
    let layout = letter_layout(8, (612.0, 792.0), 1.02);

    assert_eq!(layout.width_pt, 792.0);
    assert_eq!(layout.height_pt, 612.0);
    assert_eq!(layout.placements.len(), 8);

    // Slot order follows the template, each slot showing its own page
    let expected = [
        (5, 0, 0, true),
        (4, 0, 1, true),
        (3, 0, 2, true),
        (2, 0, 3, true),
        (6, 1, 0, false),
        (7, 1, 1, false),
        (8, 1, 2, false),
        (1, 1, 3, false),
    ];
    for (placement, (page, row, col, rotated)) in layout.placements.iter().zip(expected) {
        assert_eq!(placement.slot.page_number, page);
        assert_eq!(placement.slot.grid_pos, GridPosition::new(row, col));
        assert_eq!(placement.is_rotated(), rotated);
        assert_eq!(placement.content, SlotContent::Content(page - 1));
        assert_eq!(placement.cell.x, col as f32 * 198.0);
        assert_eq!(placement.cell.y, if row == 0 { 306.0 } else { 0.0 });
    }
}

#[test]
fn test_every_page_centred_in_its_cell() {
    let layout = letter_layout(8, (612.0, 792.0), 1.02);
    for placement in &layout.placements {
        assert!(approx(
            placement.content_rect.center_x(),
            placement.cell.center_x()
        ));
        assert!(approx(
            placement.content_rect.center_y(),
            placement.cell.center_y()
        ));
    }
}

#[test]
fn test_margin_factor_one_fits_constrained_axis() {
    let layout = letter_layout(8, (612.0, 792.0), 1.0);
    let placement = &layout.placements[7];

    assert!(approx(placement.content_rect.width, 198.0));
    assert!(approx(placement.content_rect.x, placement.cell.x));
    assert!(placement.content_rect.height < placement.cell.height);
}

#[test]
fn test_margin_factor_overflows_symmetrically() {
    let layout = letter_layout(8, (612.0, 792.0), 1.02);
    let placement = &layout.placements[7];

    // 2% wider than the cell, 1% spilling over each side
    assert!(approx(placement.content_rect.width, 198.0 * 1.02));
    assert!(approx(placement.cell.x - placement.content_rect.x, 198.0 * 0.01));
    assert!(approx(
        placement.content_rect.right() - placement.cell.right(),
        198.0 * 0.01
    ));
}

#[test]
fn test_scale_for_small_pages() {
    let layout = letter_layout(8, (200.0, 300.0), 1.02);
    assert!(approx(layout.scale, 1.0098));
    assert!(layout.placements.iter().all(|p| p.scale == layout.scale));
}

#[test]
fn test_partial_document_blanks_trailing_pages() {
    let layout = letter_layout(3, (612.0, 792.0), 1.02);

    for placement in &layout.placements {
        if placement.slot.page_number <= 3 {
            assert_eq!(
                placement.source_page(),
                Some(placement.slot.page_number - 1)
            );
        } else {
            assert_eq!(placement.content, SlotContent::Blank);
        }
    }
    assert_eq!(layout.content_placements().count(), 3);
}

#[test]
fn test_landscape_pages_constrained_by_width() {
    let layout = letter_layout(1, (792.0, 612.0), 1.0);
    assert!(approx(layout.scale, 198.0 / 792.0));
}

#[test]
fn test_custom_template_is_respected() {
    let template = LayoutTemplate {
        sheet_width_pt: 400.0,
        sheet_height_pt: 200.0,
        columns: 2,
        rows: 1,
        slots: vec![
            Slot::new(2, 0, 0, SlotRotation::Inverted),
            Slot::new(1, 0, 1, SlotRotation::Upright),
        ],
    };
    let layout = build_layout(&template, 2, Some((200.0, 200.0)), 1.0);

    assert_eq!(layout.grid.cell_width_pt, 200.0);
    assert_eq!(layout.grid.cell_height_pt, 200.0);
    assert!(approx(layout.scale, 1.0));
    assert_eq!(layout.placements[1].cell, Rect::new(200.0, 0.0, 200.0, 200.0));
}

#[test]
fn test_unvalidated_template_does_not_panic() {
    let mut template = LayoutTemplate::pocketmod_letter();
    template.slots[0] = Slot::new(5, 4, 0, SlotRotation::Inverted);
    template.slots[1] = Slot::new(0, 0, 1, SlotRotation::Inverted);

    let layout = build_layout(&template, 8, Some((612.0, 792.0)), 1.02);
    assert_eq!(layout.placements[0].cell.y, 0.0);
    assert_eq!(layout.placements[1].source_page(), Some(0));
}
