use std::{ops::Range, sync::Arc};

use super::types::InlineNode;

/// Shared handle to an inline rule.
pub type SharedInlineRule = Arc<dyn InlineRule + Send + Sync>;

/// Matcher and builder for one kind of inline markup.
///
/// Rules are configuration: a flavor decides which ones exist and in which
/// order. The tokenizer only relies on this contract.
pub trait InlineRule {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    /// Returns the byte range of the leftmost match in `text`, if any.
    ///
    /// Empty ranges are ignored by the tokenizer.
    fn find(&self, text: &str) -> Option<Range<usize>>;

    /// Builds a node from exactly the substring that [`find`](Self::find) matched.
    fn build(&self, matched: &str) -> InlineNode;
}
