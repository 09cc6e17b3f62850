//! PocketMod imposition - arranging eight pages on one foldable sheet
//!
//! This module orchestrates the process:
//! 1. Validate and load the source document
//! 2. Compute the sheet layout from the first page size
//! 3. Render every content slot into a single output page
//! 4. Save the output document

mod io;

pub use io::{SourceDocument, load_source, save_pdf, validate_input};

use crate::layout::{SheetLayout, build_layout};
use crate::options::PocketModOptions;
use crate::render::render_sheet;
use crate::stats::summarize;
use crate::types::*;
use log::info;
use lopdf::{Dictionary, Document, Object};
use std::path::Path;

/// A rendered PocketMod sheet together with the layout that produced it
#[derive(Debug)]
pub struct PocketMod {
    pub document: Document,
    pub layout: SheetLayout,
}

/// Compute the sheet layout for a source document.
pub fn layout_source(source: &SourceDocument, options: &PocketModOptions) -> Result<SheetLayout> {
    options.validate()?;

    let margin_factor = options.margin_factor();
    let layout = build_layout(
        &options.template,
        source.page_count(),
        source.first_page_size(),
        margin_factor,
    );

    info!("Processing {} pages from input PDF...", source.page_count());
    info!(
        "Output canvas: {} × {} points",
        layout.width_pt, layout.height_pt
    );
    info!(
        "Grid cells: {} × {} points each",
        layout.grid.cell_width_pt, layout.grid.cell_height_pt
    );
    if let Some((width, height)) = layout.source_size {
        info!("Input page size: {} × {} points", width, height);
    }
    info!(
        "Uniform scale factor: {:.3} (margin factor {:.3})",
        layout.scale, margin_factor
    );

    Ok(layout)
}

/// Render a computed layout into a new single-page document.
pub fn render_pocketmod(
    source: &SourceDocument,
    layout: &SheetLayout,
    marks: &GuideMarks,
) -> Result<Document> {
    let mut output = Document::with_version("1.7");
    let pages_tree_id = output.new_object_id();

    let page_id = render_sheet(
        &mut output,
        source.document(),
        source.page_ids(),
        layout,
        marks,
        pages_tree_id,
    )?;

    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(vec![Object::Reference(page_id)])),
        ("Count", Object::Integer(1)),
    ]);
    output
        .objects
        .insert(pages_tree_id, Object::Dictionary(pages_dict));

    let catalog_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_tree_id)),
    ]));

    output.trailer.set("Root", catalog_id);

    Ok(output)
}

/// Lay out and render a source document.
pub fn create_pocketmod(source: &SourceDocument, options: &PocketModOptions) -> Result<PocketMod> {
    let layout = layout_source(source, options)?;
    let document = render_pocketmod(source, &layout, &options.marks)?;
    Ok(PocketMod { document, layout })
}

/// Convert `input` into a PocketMod sheet saved at `output`.
///
/// All-or-nothing: any failure aborts before the output file is written.
pub fn convert_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &PocketModOptions,
) -> Result<LayoutSummary> {
    options.validate()?;
    let source = load_source(input)?;
    let mut pocketmod = create_pocketmod(&source, options)?;
    save_pdf(&mut pocketmod.document, output)?;
    Ok(summarize(&pocketmod.layout))
}
