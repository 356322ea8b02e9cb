//! # markymark-engine
//!
//! Line-oriented Markdown parsing with pluggable rendering.
//!
//! Markdown text is split into lines and handed to an ordered set of block
//! rules; the first rule that conforms builds the next block. Block text is
//! tokenized into inline nodes only when a renderer asks for it. Renderers
//! are registered per node variant in a [`Converter`] (blocks) and an
//! [`InlineConverter`] (inline), so the same tree can be projected into any
//! output type.
//!
//! ```
//! use markymark_engine::{ContentfulFlavor, HtmlOptions, render::html};
//!
//! let markymark = html::pipeline(&ContentfulFlavor, &HtmlOptions::default()).unwrap();
//! let out = markymark.parse_markdown("# Hello\nsome **bold** text").unwrap();
//! assert_eq!(out, ["<h1>Hello</h1>", "<p>some <strong>bold</strong> text</p>"]);
//! ```
//!
//! ## Modules
//!
//! - **`parsing`**: line buffer, block rules and parser, inline rules and tokenizer
//! - **`flavor`**: bundled rule sets
//! - **`convert`**: block and inline renderer registries
//! - **`render`**: reference HTML renderers
//! - **`markymark`**: the `MarkyMark` facade and its builder
//! - **`error`**: build and conversion errors
//! - **`snapshot`**: outline and invariant helpers for tests

pub mod convert;
pub mod error;
pub mod flavor;
pub mod markymark;
pub mod parsing;
pub mod render;
pub mod snapshot;

pub use convert::{
    BlockVariant, Converter, DisplayItem, InlineConverter, InlineDisplayItem, InlineVariant,
};
pub use error::{BuildError, ConvertError};
pub use flavor::{ContentfulFlavor, Flavor, MarkdownFlavor};
pub use markymark::{Builder, MarkyMark};
pub use parsing::{Block, BlockKind, BlockParser, InlineKind, InlineNode, ParsedDoc};
pub use render::HtmlOptions;
