//! # Parsing
//!
//! Markdown source to block and inline nodes.
//!
//! ## Modules
//!
//! - **`lines`**: `MarkdownLines`, the line buffer consumed by the block parser
//! - **`blocks`**: block rules and the `BlockParser` engine
//! - **`inline`**: inline rules and the leftmost-match tokenizer
//!
//! Parsing is a pure function of the input text and the rule set. Nothing
//! is shared between parses, so a parser can be reused freely.

pub mod blocks;
pub mod inline;
pub mod lines;

pub use blocks::{Block, BlockKind, BlockParser, ParsedDoc};
pub use inline::{InlineKind, InlineNode, parse_inline};
