//! # Inline Kinds
//!
//! The inline rules shipped with the bundled flavors. Each rule owns its
//! delimiters and patterns; the tokenizer never hardcodes `**` or `` ` ``.
//!
//! ## Types
//!
//! - **`BoldRule`**: `**x**` / `__x__`, delimiter-scanned
//! - **`ItalicRule`**: `*x*`, delimiter-scanned
//! - **`StrikeRule`**: `~~x~~`
//! - **`InlineCodeRule`**: `` `x` `` - rendered verbatim
//! - **`LinkRule`**: `[text](url "title")`, never preceded by `!` (or `! ` when spaced images are on)
//! - **`ShortLinkRule`**: `<scheme://url>`
//! - **`InlineImageRule`**: `![alt](url)`
//!
//! `regex` has no look-around, so the two emphasis rules walk a
//! [`Cursor`](super::cursor::Cursor) to check their neighbouring bytes.

pub mod bold;
pub mod code;
pub mod image;
pub mod italic;
pub mod link;
pub mod short_link;
pub mod strike;

pub use bold::BoldRule;
pub use code::InlineCodeRule;
pub use image::InlineImageRule;
pub use italic::ItalicRule;
pub use link::LinkRule;
pub use short_link::ShortLinkRule;
pub use strike::StrikeRule;
