use std::sync::Arc;

use crate::parsing::{
    blocks::{
        SharedBlockRule,
        kinds::{CodeBlockRule, HeaderRule, ListRule, ParagraphRule, QuoteRule},
    },
    inline::{
        SharedInlineRule,
        kinds::{BoldRule, LinkRule, ShortLinkRule},
    },
};

use super::Flavor;

/// The base dialect: headers, quotes, lists and fenced code, with bold and
/// links inline.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownFlavor;

impl MarkdownFlavor {
    pub const NAME: &'static str = "markdown";
}

impl Flavor for MarkdownFlavor {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn rules(&self) -> Vec<SharedBlockRule> {
        vec![
            Arc::new(HeaderRule),
            Arc::new(QuoteRule),
            Arc::new(ListRule),
            Arc::new(CodeBlockRule),
        ]
    }

    fn inline_rules(&self) -> Vec<SharedInlineRule> {
        vec![
            Arc::new(BoldRule::asterisk()),
            Arc::new(BoldRule::underscore()),
            Arc::new(LinkRule::new(false)),
            Arc::new(ShortLinkRule::default()),
        ]
    }

    fn default_rule(&self) -> SharedBlockRule {
        Arc::new(ParagraphRule)
    }
}
