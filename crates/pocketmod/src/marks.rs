//! Guide marks for the folded booklet
//!
//! A PocketMod is folded along every internal grid line and slit along
//! the horizontal centre line between the two middle columns. This module
//! generates PDF content stream operations that draw those lines.

use crate::constants::{CUT_LINE_WIDTH, FOLD_LINE_DASH, FOLD_LINE_WIDTH, GUIDE_GRAY};
use crate::layout::GridLayout;
use crate::types::GuideMarks;

/// A straight line segment in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl Segment {
    fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn stroke_ops(&self) -> String {
        format!("{} {} m {} {} l S\n", self.x1, self.y1, self.x2, self.y2)
    }
}

/// The slit cut along the horizontal centre, if the grid has one.
///
/// It spans every column except the outermost two, so the sheet stays
/// joined at both ends.
pub fn cut_segment(grid: &GridLayout) -> Option<Segment> {
    if grid.rows % 2 != 0 || grid.cols < 3 {
        return None;
    }
    let y = (grid.rows / 2) as f32 * grid.cell_height_pt;
    Some(Segment::new(
        grid.cell_width_pt,
        y,
        (grid.cols - 1) as f32 * grid.cell_width_pt,
        y,
    ))
}

/// All fold lines, with the cut span left out of the centre line
pub fn fold_segments(grid: &GridLayout) -> Vec<Segment> {
    let width = grid.cols as f32 * grid.cell_width_pt;
    let height = grid.rows as f32 * grid.cell_height_pt;
    let cut = cut_segment(grid);

    let mut segments = Vec::new();

    for col in 1..grid.cols {
        let x = col as f32 * grid.cell_width_pt;
        segments.push(Segment::new(x, 0.0, x, height));
    }

    for row in 1..grid.rows {
        let y = row as f32 * grid.cell_height_pt;
        match cut {
            Some(cut) if cut.y1 == y => {
                segments.push(Segment::new(0.0, y, cut.x1, y));
                segments.push(Segment::new(cut.x2, y, width, y));
            }
            _ => segments.push(Segment::new(0.0, y, width, y)),
        }
    }

    segments
}

/// Generate all enabled guide marks as PDF content stream operations
pub fn generate_marks(marks: &GuideMarks, grid: &GridLayout) -> String {
    let mut ops = String::new();

    ops.push_str("q\n");
    ops.push_str(&format!("{} G\n", GUIDE_GRAY));

    if marks.fold_lines {
        ops.push_str(&format!("{} w\n", FOLD_LINE_WIDTH));
        ops.push_str(&format!("[{} {}] 0 d\n", FOLD_LINE_DASH.0, FOLD_LINE_DASH.1));
        for segment in fold_segments(grid) {
            ops.push_str(&segment.stroke_ops());
        }
        ops.push_str("[] 0 d\n");
    }

    if marks.cut_line {
        if let Some(cut) = cut_segment(grid) {
            ops.push_str(&format!("{} w\n", CUT_LINE_WIDTH));
            ops.push_str(&cut.stroke_ops());
        }
    }

    ops.push_str("Q\n");

    ops
}
