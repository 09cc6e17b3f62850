//! PDF rendering modules for PocketMod sheets
//!
//! This module handles all PDF-specific operations:
//! - Creating XObjects from source pages
//! - Building the output sheet page
//! - Generating transformation matrices
//! - Deep copying PDF objects

mod sheet;
mod xobject;

pub use sheet::{placement_matrix, render_sheet};
pub use xobject::{
    PageGeometry, PageXObject, copy_object_deep, create_page_xobject, get_page_dimensions,
    page_geometry,
};
