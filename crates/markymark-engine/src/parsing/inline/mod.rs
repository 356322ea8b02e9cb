//! # Inline Parsing
//!
//! Leftmost-match tokenizing of a block's text content.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing. Block nodes only store
//! their raw content as an [`InlineString`]; it is tokenized when a renderer
//! asks for it, and nested content (bold, italic, strike) is tokenized again
//! one level down at that point. Content that is never rendered is never
//! tokenized.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum and the per-variant string types
//! - **`rule`**: the `InlineRule` contract (`find` + `build`)
//! - **`kinds`**: inline rules shipped with the bundled flavors
//! - **`cursor`**: `Cursor` for delimiter scanning where a regex cannot express the rule
//! - **`parser`**: `parse_inline()`, the single-pass leftmost-match scan
//!
//! ## Match Precedence
//!
//! The earliest-starting match across all rules wins; on equal starts the
//! rule registered first wins. `` `**x**` `` is therefore a code span when
//! the code rule is the only one matching at the backtick.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod rule;
pub mod types;

pub use parser::parse_inline;
pub use rule::{InlineRule, SharedInlineRule};
pub use types::{
    BoldString, CodeString, ImageString, InlineKind, InlineNode, InlineString, ItalicString,
    LinkString, MarkdownString, StrikeString, TextString,
};
