use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PocketModError {
    #[error("Input file not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("Input file must be a PDF: {}", path.display())]
    NotPdf { path: PathBuf },
    #[error("Invalid PDF file {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: lopdf::Error,
    },
    #[error("PDF has no pages: {}", path.display())]
    NoPages { path: PathBuf },
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("PDF rendering failed: {0}")]
    Render(#[from] lopdf::Error),
    #[error("Corrupt content stream {} {} R: {source}", id.0, id.1)]
    CorruptContent {
        id: lopdf::ObjectId,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to save {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Coarse failure class, independent of the variant that carried it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input path does not exist
    NotFound,
    /// The input is not a usable PDF (wrong extension, corrupt, empty)
    Format,
    /// Embedding pages or writing the output failed
    Render,
    /// Options or config file were rejected
    Config,
}

impl PocketModError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PocketModError::NotFound { .. } => ErrorKind::NotFound,
            PocketModError::NotPdf { .. }
            | PocketModError::Unreadable { .. }
            | PocketModError::NoPages { .. } => ErrorKind::Format,
            PocketModError::Render(_)
            | PocketModError::CorruptContent { .. }
            | PocketModError::Save { .. } => ErrorKind::Render,
            PocketModError::Config(_) => ErrorKind::Config,
        }
    }
}

pub type Result<T> = std::result::Result<T, PocketModError>;

/// Which guide marks to draw on the output sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GuideMarks {
    /// Dashed lines along every fold
    pub fold_lines: bool,
    /// Solid line along the centre slit between the middle columns
    pub cut_line: bool,
}

impl GuideMarks {
    pub fn any_enabled(&self) -> bool {
        self.fold_lines || self.cut_line
    }
}

/// Statistics about a computed layout
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSummary {
    /// Pages in the source document
    pub source_pages: usize,
    /// Source pages that were placed on the sheet
    pub pages_used: usize,
    /// Slots left empty because the source ran out of pages
    pub blank_slots: usize,
    /// Source pages beyond the slot count that were dropped
    pub ignored_pages: usize,
    /// Uniform scale applied to every page
    pub scale: f32,
    /// Size of the first source page in points, if any
    pub source_size: Option<(f32, f32)>,
}
