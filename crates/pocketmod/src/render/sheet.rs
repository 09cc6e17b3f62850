//! Output sheet rendering
//!
//! Builds the single output page: one Form XObject per content slot,
//! each drawn through its own transformation matrix, followed by any
//! guide marks.

use crate::layout::{PagePlacement, SheetLayout};
use crate::marks::generate_marks;
use crate::types::{GuideMarks, Result};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

use super::xobject::{PageGeometry, create_page_xobject};

/// Render the sheet layout as a page of `output`.
///
/// Blank placements draw nothing. Placements that reference a page past
/// the end of `source_page_ids` are skipped.
pub fn render_sheet(
    output: &mut Document,
    source: &Document,
    source_page_ids: &[ObjectId],
    layout: &SheetLayout,
    marks: &GuideMarks,
    parent_pages_id: ObjectId,
) -> Result<ObjectId> {
    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(parent_pages_id));
    page_dict.set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(layout.width_pt),
            Object::Real(layout.height_pt),
        ]),
    );

    let mut content_ops = Vec::new();
    let mut xobjects = Dictionary::new();
    let mut xobject_cache: HashMap<ObjectId, ObjectId> = HashMap::new();

    for placement in &layout.placements {
        let Some(source_idx) = placement.source_page() else {
            continue;
        };
        let Some(&source_page_id) = source_page_ids.get(source_idx) else {
            continue;
        };

        let xobject = create_page_xobject(output, source, source_page_id, &mut xobject_cache)?;
        let xobject_name = format!("P{}", placement.slot.page_number);
        xobjects.set(xobject_name.as_bytes(), Object::Reference(xobject.id));

        let [a, b, c, d, e, f] = placement_matrix(placement, &xobject.geometry);
        content_ops.push(format!(
            "q {} {} {} {} {} {} cm /{} Do Q\n",
            a, b, c, d, e, f, xobject_name
        ));
    }

    if marks.any_enabled() {
        content_ops.push(generate_marks(marks, &layout.grid));
    }

    let mut resources = Dictionary::new();
    resources.set("XObject", Object::Dictionary(xobjects));

    let content = content_ops.join("");
    let content_id = output.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(resources));

    Ok(output.add_object(page_dict))
}

/// Transformation matrix `[a b c d e f]` that maps a source page into its
/// placement rectangle.
///
/// The page is turned clockwise by its own `/Rotate` plus the slot rotation,
/// scaled, and its rotated visible box is moved onto the rectangle. For an
/// unrotated page in an inverted slot this is a half turn about the
/// rectangle's centre, so the footprint matches the upright case.
pub fn placement_matrix(placement: &PagePlacement, geometry: &PageGeometry) -> [f32; 6] {
    let rect = &placement.content_rect;
    let scale = placement.scale;
    let [llx, lly, _, _] = geometry.bbox;
    let (width, height) = (geometry.width(), geometry.height());

    // Unit rotation, then the offset that brings the turned box back to the origin
    let turn = (geometry.rotation + placement.slot.rotation.degrees()).rem_euclid(360);
    let (a, b, c, d, ox, oy) = match turn {
        90 => (0.0, -1.0, 1.0, 0.0, 0.0, width),
        180 => (-1.0, 0.0, 0.0, -1.0, width, height),
        270 => (0.0, 1.0, -1.0, 0.0, height, 0.0),
        _ => (1.0, 0.0, 0.0, 1.0, 0.0, 0.0),
    };

    [
        scale * a,
        scale * b,
        scale * c,
        scale * d,
        rect.x + scale * (ox - a * llx - c * lly),
        rect.y + scale * (oy - b * llx - d * lly),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Rect, Slot, SlotContent, SlotRotation};

    fn placement(rotation: SlotRotation) -> PagePlacement {
        PagePlacement {
            slot: Slot::new(1, 1, 3, rotation),
            content: SlotContent::Content(0),
            cell: Rect::new(594.0, 0.0, 198.0, 306.0),
            content_rect: Rect::new(600.0, 10.0, 100.0, 200.0),
            scale: 0.5,
        }
    }

    fn apply(m: [f32; 6], x: f32, y: f32) -> (f32, f32) {
        (m[0] * x + m[2] * y + m[4], m[1] * x + m[3] * y + m[5])
    }

    fn geometry(bbox: [f32; 4], rotation: i32) -> PageGeometry {
        PageGeometry { bbox, rotation }
    }

    #[test]
    fn test_upright_maps_corners() {
        let m = placement_matrix(
            &placement(SlotRotation::Upright),
            &geometry([0.0, 0.0, 200.0, 400.0], 0),
        );
        assert_eq!(apply(m, 0.0, 0.0), (600.0, 10.0));
        assert_eq!(apply(m, 200.0, 400.0), (700.0, 210.0));
    }

    #[test]
    fn test_inverted_keeps_footprint() {
        let m = placement_matrix(
            &placement(SlotRotation::Inverted),
            &geometry([0.0, 0.0, 200.0, 400.0], 0),
        );
        assert_eq!(m, [-0.5, 0.0, 0.0, -0.5, 700.0, 210.0]);
        // Source lower-left lands on the rectangle's upper-right and vice versa
        assert_eq!(apply(m, 0.0, 0.0), (700.0, 210.0));
        assert_eq!(apply(m, 200.0, 400.0), (600.0, 10.0));
    }

    #[test]
    fn test_offset_box_origin() {
        let offset = geometry([50.0, 100.0, 250.0, 500.0], 0);
        let upright = placement_matrix(&placement(SlotRotation::Upright), &offset);
        assert_eq!(apply(upright, 50.0, 100.0), (600.0, 10.0));
        assert_eq!(apply(upright, 250.0, 500.0), (700.0, 210.0));

        let inverted = placement_matrix(&placement(SlotRotation::Inverted), &offset);
        assert_eq!(apply(inverted, 50.0, 100.0), (700.0, 210.0));
        assert_eq!(apply(inverted, 250.0, 500.0), (600.0, 10.0));
    }

    #[test]
    fn test_rotated_page_turns_clockwise() {
        // A 400x200 box displayed a quarter turn clockwise fills the 100x200 rect
        let page = geometry([0.0, 0.0, 400.0, 200.0], 90);

        let upright = placement_matrix(&placement(SlotRotation::Upright), &page);
        assert_eq!(apply(upright, 0.0, 0.0), (600.0, 210.0));
        assert_eq!(apply(upright, 0.0, 200.0), (700.0, 210.0));
        assert_eq!(apply(upright, 400.0, 0.0), (600.0, 10.0));
        assert_eq!(apply(upright, 400.0, 200.0), (700.0, 10.0));

        // The inverted slot adds a half turn inside the same footprint
        let inverted = placement_matrix(&placement(SlotRotation::Inverted), &page);
        assert_eq!(apply(inverted, 0.0, 0.0), (700.0, 10.0));
        assert_eq!(apply(inverted, 0.0, 200.0), (600.0, 10.0));
        assert_eq!(apply(inverted, 400.0, 200.0), (600.0, 210.0));
    }

    #[test]
    fn test_upside_down_page_in_inverted_slot_is_upright() {
        let page = geometry([0.0, 0.0, 200.0, 400.0], 180);
        let m = placement_matrix(&placement(SlotRotation::Inverted), &page);
        assert_eq!(m, [0.5, 0.0, 0.0, 0.5, 600.0, 10.0]);
    }
}
