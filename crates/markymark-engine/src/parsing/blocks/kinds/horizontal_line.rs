use crate::parsing::blocks::{
    rule::{BlockRule, LinePattern},
    types::{Block, HorizontalLine},
};

static RULER: LinePattern = LinePattern::new(r"^-{3,}$");

/// Three or more dashes alone on a line.
pub struct HorizontalLineRule;

impl BlockRule for HorizontalLineRule {
    fn name(&self) -> &'static str {
        "horizontal-line"
    }

    fn conforms(&self, lines: &[String]) -> bool {
        RULER.matches_first(lines)
    }

    fn lines_consumed(&self, _lines: &[String]) -> usize {
        1
    }

    fn to_block(&self, _lines: &[String]) -> Block {
        Block::HorizontalLine(HorizontalLine)
    }
}
