//! Document I/O for PocketMod generation

use crate::constants::BOOKLET_PAGES;
use crate::render::get_page_dimensions;
use crate::types::*;
use log::warn;
use lopdf::{Document, ObjectId};
use std::path::{Path, PathBuf};

/// A validated, parsed input PDF
#[derive(Debug)]
pub struct SourceDocument {
    path: PathBuf,
    document: Document,
    page_ids: Vec<ObjectId>,
}

impl SourceDocument {
    /// Wrap an already-parsed document
    pub fn from_document(path: impl Into<PathBuf>, document: Document) -> Self {
        let page_ids = document.get_pages().values().copied().collect();
        Self {
            path: path.into(),
            document,
            page_ids,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Page object IDs in document order
    pub fn page_ids(&self) -> &[ObjectId] {
        &self.page_ids
    }

    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    /// Size of the first page in points, or `None` for an empty document
    pub fn first_page_size(&self) -> Option<(f32, f32)> {
        self.page_ids
            .first()
            .map(|&id| get_page_dimensions(&self.document, id))
    }
}

/// Check that `path` names a readable, non-empty PDF and return its page count.
pub fn validate_input(path: impl AsRef<Path>) -> Result<usize> {
    load_source(path).map(|source| source.page_count())
}

/// Validate and parse the input PDF.
///
/// Fails with `NotFound` for a missing file, `NotPdf` for a non-`.pdf`
/// extension (before any parsing), `Unreadable` when parsing fails and
/// `NoPages` for an empty document. Warns when pages past the booklet
/// size will be dropped.
pub fn load_source(path: impl AsRef<Path>) -> Result<SourceDocument> {
    let path = path.as_ref();

    if !path.is_file() {
        return Err(PocketModError::NotFound {
            path: path.to_owned(),
        });
    }

    let is_pdf = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
    if !is_pdf {
        return Err(PocketModError::NotPdf {
            path: path.to_owned(),
        });
    }

    let document = Document::load(path).map_err(|source| PocketModError::Unreadable {
        path: path.to_owned(),
        source,
    })?;
    let source = SourceDocument::from_document(path, document);

    if source.page_count() == 0 {
        return Err(PocketModError::NoPages {
            path: path.to_owned(),
        });
    }

    if source.page_count() > BOOKLET_PAGES {
        warn!(
            "Input PDF has {} pages. Only the first {} pages will be converted to PocketMod format.",
            source.page_count(),
            BOOKLET_PAGES
        );
    }

    Ok(source)
}

/// Save the output document.
///
/// The document is serialized in memory first, so the file is only
/// created once serialization has succeeded. Serialization failures are
/// reported as `Render`, file system failures as `Save`.
pub fn save_pdf(doc: &mut Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut writer = Vec::new();
    doc.save_to(&mut writer).map_err(lopdf::Error::from)?;
    std::fs::write(path, writer).map_err(|source| PocketModError::Save {
        path: path.to_owned(),
        source,
    })?;
    Ok(())
}
