use std::sync::Arc;

use crate::parsing::{
    blocks::{
        SharedBlockRule,
        kinds::{
            CodeBlockRule, HeaderRule, HorizontalLineRule, ImageRule, ListRule, ParagraphRule,
            QuoteRule,
        },
    },
    inline::{
        SharedInlineRule,
        kinds::{
            BoldRule, InlineCodeRule, InlineImageRule, ItalicRule, LinkRule, ShortLinkRule,
            StrikeRule,
        },
    },
};

use super::Flavor;

/// Full rule set: headers, rulers, quotes, lists, fenced code and block
/// images, with strike, emphasis, images, links, autolinks and code spans
/// inline.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentfulFlavor;

impl ContentfulFlavor {
    pub const NAME: &'static str = "contentful";
}

impl Flavor for ContentfulFlavor {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn rules(&self) -> Vec<SharedBlockRule> {
        vec![
            Arc::new(HeaderRule),
            Arc::new(HorizontalLineRule),
            Arc::new(QuoteRule),
            Arc::new(ListRule),
            Arc::new(CodeBlockRule),
            Arc::new(ImageRule),
        ]
    }

    fn inline_rules(&self) -> Vec<SharedInlineRule> {
        // Images before links, so `![a](b)` is never read as text + link.
        vec![
            Arc::new(StrikeRule),
            Arc::new(ItalicRule),
            Arc::new(BoldRule::asterisk()),
            Arc::new(BoldRule::underscore()),
            Arc::new(InlineImageRule),
            Arc::new(LinkRule::default()),
            Arc::new(ShortLinkRule::default()),
            Arc::new(InlineCodeRule),
        ]
    }

    fn default_rule(&self) -> SharedBlockRule {
        Arc::new(ParagraphRule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::{
        BlockKind, BlockParser, InlineKind, InlineNode, parse_inline, blocks::Block,
    };
    use pretty_assertions::assert_eq;

    fn parser() -> BlockParser {
        let flavor = ContentfulFlavor;
        BlockParser::new(flavor.rules(), flavor.default_rule())
    }

    #[test]
    fn ruler_wins_over_list() {
        let doc = parser().parse("---\n- item");
        let kinds: Vec<_> = doc.blocks.iter().map(Block::kind).collect();
        assert_eq!(kinds, vec![BlockKind::HorizontalLine, BlockKind::List]);
    }

    #[test]
    fn image_line_is_an_image_block() {
        let doc = parser().parse("![alt](pic.png)");
        assert_eq!(doc.blocks[0].kind(), BlockKind::Image);
    }

    #[test]
    fn spaced_bang_is_an_image_marker() {
        let nodes = parse_inline("wow! [a](b)", &ContentfulFlavor.inline_rules());
        assert_eq!(nodes, vec![InlineNode::text("wow! [a](b)")]);
    }

    #[test]
    fn inline_rules_cover_every_markup() {
        let nodes = parse_inline(
            "~~s~~ *i* **b** __u__ ![a](p.png) [l](u) <https://x.io> `c`",
            &ContentfulFlavor.inline_rules(),
        );
        let kinds: Vec<_> = nodes
            .iter()
            .map(InlineNode::kind)
            .filter(|k| *k != InlineKind::Text)
            .collect();
        assert_eq!(
            kinds,
            vec![
                InlineKind::Strike,
                InlineKind::Italic,
                InlineKind::Bold,
                InlineKind::Bold,
                InlineKind::Image,
                InlineKind::Link,
                InlineKind::Link,
                InlineKind::Code,
            ]
        );
    }
}
