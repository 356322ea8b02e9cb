//! Reference renderer sets.
//!
//! - **`html`**: one `String` renderer per block and inline variant

pub mod html;

pub use html::{HtmlOptions, block_converter, inline_converter, join, pipeline};
