//! # Block Parsing
//!
//! Splits a document into a flat sequence of block nodes.
//!
//! ## Modules
//!
//! - **`types`**: `Block` and its payload structs, `BlockKind`, `ParsedDoc`
//! - **`rule`**: the `BlockRule` contract and `LinePattern` for single-line rules
//! - **`kinds`**: block rules shipped with the bundled flavors
//! - **`parser`**: `BlockParser`, the rule dispatch loop
//!
//! ## Key Invariants
//!
//! - Blocks come out in source order
//! - Every input line is consumed by exactly one block
//! - Only lists nest; every other block is a single level
//! - Block nodes hold raw inline content; inline parsing happens at render time

pub mod kinds;
pub mod parser;
pub mod rule;
pub mod types;

pub use parser::{BlockParser, SharedBlockRule};
pub use rule::{BlockRule, LinePattern};
pub use types::{
    Block, BlockKind, CodeBlock, Header, HorizontalLine, Image, ListItem, MarkdownList,
    Paragraph, ParsedDoc, QuoteBlock,
};
