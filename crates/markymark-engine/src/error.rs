use crate::parsing::{BlockKind, InlineKind};

/// A [`MarkyMark`](crate::MarkyMark) builder that is missing a required piece.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("No block rules added, use add_rule() or add_flavor()")]
    NoRules,
    #[error("No default rule set, use set_default_rule() or add_flavor()")]
    NoDefaultRule,
    #[error("No converter set, use set_converter()")]
    NoConverter,
    #[error("No inline converter set, use set_inline_converter()")]
    NoInlineConverter,
}

/// A node reached a registry with no renderer for its variant.
///
/// This is a setup error surfaced at conversion time; it is never skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("no renderer registered for block variant {0}")]
    NoRenderer(BlockKind),
    #[error("no renderer registered for inline variant {0}")]
    NoInlineRenderer(InlineKind),
}
