//! # Conversion
//!
//! Renderer registries that project parsed nodes into an output type.
//!
//! A [`Converter`] maps every [`BlockKind`](crate::parsing::BlockKind) to a
//! renderer producing `T`; an [`InlineConverter`] does the same for inline
//! nodes producing `I`. Block renderers receive the inline converter so they
//! can render their text content. Renderers are registered against the
//! payload type they accept, which fixes the variant they handle.
//!
//! ## Modules
//!
//! - **`variant`**: `BlockVariant` / `InlineVariant`, tying payload types to their kinds
//! - **`block`**: `Converter` and the `DisplayItem` renderer trait
//! - **`inline`**: `InlineConverter` and the `InlineDisplayItem` renderer trait

pub mod block;
pub mod inline;
pub mod variant;

pub use block::{Converter, DisplayItem};
pub use inline::{InlineConverter, InlineDisplayItem};
pub use variant::{BlockVariant, InlineVariant};
