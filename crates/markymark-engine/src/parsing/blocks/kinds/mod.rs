//! Block rules shipped with the bundled flavors.

pub mod code_block;
pub mod header;
pub mod horizontal_line;
pub mod image;
pub mod list;
pub mod paragraph;
pub mod quote;

pub use code_block::CodeBlockRule;
pub use header::HeaderRule;
pub use horizontal_line::HorizontalLineRule;
pub use image::ImageRule;
pub use list::{INDENT_SIZE, ListRule};
pub use paragraph::ParagraphRule;
pub use quote::QuoteRule;
