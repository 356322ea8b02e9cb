use std::sync::Arc;

use crate::parsing::lines::MarkdownLines;

use super::{rule::BlockRule, types::ParsedDoc};

/// Shared handle to a block rule.
pub type SharedBlockRule = Arc<dyn BlockRule + Send + Sync>;

/// Drives an ordered rule set over the lines of a document.
///
/// Each step hands the whole remaining window to the rules in order. The
/// first rule that conforms builds the next block; when none does, the
/// default rule is applied without asking. The window then advances by the
/// number of lines the chosen rule consumed.
#[derive(Clone)]
pub struct BlockParser {
    rules: Vec<SharedBlockRule>,
    default_rule: SharedBlockRule,
}

impl BlockParser {
    pub fn new(rules: Vec<SharedBlockRule>, default_rule: SharedBlockRule) -> Self {
        Self {
            rules,
            default_rule,
        }
    }

    pub fn rules(&self) -> &[SharedBlockRule] {
        &self.rules
    }

    fn select(&self, window: &[String]) -> &SharedBlockRule {
        self.rules
            .iter()
            .find(|rule| rule.conforms(window))
            .unwrap_or(&self.default_rule)
    }

    /// Parses `markdown` into blocks in source order.
    ///
    /// # Panics
    ///
    /// Panics if the selected rule reports zero consumed lines, or more lines
    /// than remain. Either would otherwise loop forever or read past the input.
    pub fn parse(&self, markdown: &str) -> ParsedDoc {
        let mut lines = MarkdownLines::new(markdown);
        let mut doc = ParsedDoc {
            line_count: lines.total(),
            ..ParsedDoc::default()
        };

        while !lines.is_empty() {
            let window = lines.window();
            let rule = self.select(window);
            let count = rule.lines_consumed(window);
            assert!(
                count >= 1 && count <= window.len(),
                "block rule `{}` consumed {count} lines with {} remaining",
                rule.name(),
                window.len()
            );

            let block = rule.to_block(lines.peek(count));
            let span = lines.consume(count);
            log::trace!("{} -> {:?} lines {span:?}", rule.name(), block.kind());

            doc.blocks.push(block);
            doc.spans.push(span);
        }

        log::debug!(
            "parsed {} blocks from {} lines",
            doc.blocks.len(),
            doc.line_count
        );
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::blocks::{
        kinds::{CodeBlockRule, HeaderRule, ListRule, ParagraphRule, QuoteRule},
        types::{Block, BlockKind},
    };
    use crate::parsing::lines::Span;
    use pretty_assertions::assert_eq;

    fn parser() -> BlockParser {
        BlockParser::new(
            vec![
                Arc::new(HeaderRule),
                Arc::new(QuoteRule),
                Arc::new(ListRule),
                Arc::new(CodeBlockRule),
            ],
            Arc::new(ParagraphRule),
        )
    }

    fn kinds(doc: &ParsedDoc) -> Vec<BlockKind> {
        doc.blocks.iter().map(Block::kind).collect()
    }

    #[test]
    fn empty_input_has_no_blocks() {
        let doc = parser().parse("");
        assert!(doc.blocks.is_empty());
        assert_eq!(doc.line_count, 0);
    }

    #[test]
    fn blocks_keep_source_order() {
        let doc = parser().parse("# Title\ntext\n- a\n- b\n> quote\n```\ncode\n```");
        assert_eq!(
            kinds(&doc),
            vec![
                BlockKind::Header,
                BlockKind::Paragraph,
                BlockKind::List,
                BlockKind::Quote,
                BlockKind::CodeBlock,
            ]
        );
        assert_eq!(
            doc.spans,
            vec![
                Span { start: 0, end: 1 },
                Span { start: 1, end: 2 },
                Span { start: 2, end: 4 },
                Span { start: 4, end: 5 },
                Span { start: 5, end: 8 },
            ]
        );
    }

    #[test]
    fn default_rule_takes_unmatched_lines() {
        let doc = parser().parse("one\n\ntwo");
        assert_eq!(kinds(&doc), vec![BlockKind::Paragraph; 3]);
    }

    #[test]
    fn earlier_rule_wins() {
        let paragraphs_first = BlockParser::new(
            vec![Arc::new(ParagraphRule), Arc::new(HeaderRule)],
            Arc::new(ParagraphRule),
        );
        let doc = paragraphs_first.parse("# Title");
        assert_eq!(kinds(&doc), vec![BlockKind::Paragraph]);
    }

    #[test]
    fn default_rule_is_not_consulted() {
        struct Never;
        impl BlockRule for Never {
            fn name(&self) -> &'static str {
                "never"
            }
            fn conforms(&self, _lines: &[String]) -> bool {
                false
            }
            fn lines_consumed(&self, _lines: &[String]) -> usize {
                1
            }
            fn to_block(&self, lines: &[String]) -> Block {
                ParagraphRule.to_block(lines)
            }
        }

        let parser = BlockParser::new(vec![], Arc::new(Never));
        assert_eq!(parser.parse("a\nb").blocks.len(), 2);
    }

    #[test]
    #[should_panic(expected = "consumed 0 lines")]
    fn rule_consuming_nothing_panics() {
        struct Stuck;
        impl BlockRule for Stuck {
            fn name(&self) -> &'static str {
                "stuck"
            }
            fn conforms(&self, _lines: &[String]) -> bool {
                true
            }
            fn lines_consumed(&self, _lines: &[String]) -> usize {
                0
            }
            fn to_block(&self, lines: &[String]) -> Block {
                ParagraphRule.to_block(lines)
            }
        }

        BlockParser::new(vec![Arc::new(Stuck)], Arc::new(ParagraphRule)).parse("x");
    }
}
