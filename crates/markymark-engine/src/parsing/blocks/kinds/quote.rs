use crate::parsing::blocks::{
    rule::{BlockRule, LinePattern},
    types::{Block, QuoteBlock},
};
use crate::parsing::inline::InlineString;

static QUOTE: LinePattern = LinePattern::new(r"^(>+)(.*?)$");

/// A single `>` line. Repeated markers are flattened into one quote.
pub struct QuoteRule;

impl BlockRule for QuoteRule {
    fn name(&self) -> &'static str {
        "quote"
    }

    fn conforms(&self, lines: &[String]) -> bool {
        QUOTE.matches_first(lines)
    }

    fn lines_consumed(&self, _lines: &[String]) -> usize {
        1
    }

    fn to_block(&self, lines: &[String]) -> Block {
        let line = lines.first().map(String::as_str).unwrap_or_default();
        let content = line.trim_start_matches('>');
        Block::Quote(QuoteBlock {
            content: InlineString::new(content, true),
        })
    }
}
