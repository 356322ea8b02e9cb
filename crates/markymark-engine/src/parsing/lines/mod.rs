//! # Line Buffer
//!
//! The block parser never looks at raw text directly. Input is split into
//! lines once, and rules are handed the remaining lines as a window.
//!
//! - **`buffer`**: `MarkdownLines`, the ordered remainder of the input
//! - **`span`**: `Span`, a half-open range of line indices into the input

pub mod buffer;
pub mod span;

pub use buffer::MarkdownLines;
pub use span::Span;
