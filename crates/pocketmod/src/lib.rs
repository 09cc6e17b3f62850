pub mod constants;
pub mod impose;
pub mod layout;
pub mod marks;
mod options;
pub mod render;
mod stats;
mod types;

pub use impose::{
    PocketMod, SourceDocument, convert_file, create_pocketmod, layout_source, load_source,
    render_pocketmod, save_pdf, validate_input,
};
pub use options::*;
pub use stats::summarize;
pub use types::*;
