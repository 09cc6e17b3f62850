use crate::layout::SheetLayout;
use crate::types::*;

/// Summarize what a layout places on the sheet
pub fn summarize(layout: &SheetLayout) -> LayoutSummary {
    let pages_used = layout.content_placements().count();
    let blank_slots = layout.placements.len() - pages_used;
    let ignored_pages = layout.source_pages.saturating_sub(layout.placements.len());

    LayoutSummary {
        source_pages: layout.source_pages,
        pages_used,
        blank_slots,
        ignored_pages,
        scale: layout.scale,
        source_size: layout.source_size,
    }
}

impl LayoutSummary {
    /// Size of one placed page on the sheet in points
    pub fn scaled_size(&self) -> Option<(f32, f32)> {
        self.source_size
            .map(|(width, height)| (width * self.scale, height * self.scale))
    }
}
