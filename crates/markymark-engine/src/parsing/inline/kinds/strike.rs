use std::{ops::Range, sync::OnceLock};

use regex::Regex;

use crate::parsing::inline::{
    rule::InlineRule,
    types::{InlineNode, StrikeString},
};

/// Strike-through: `~~gone~~`.
pub struct StrikeRule;

impl StrikeRule {
    fn regex() -> &'static Regex {
        static STRIKE_REGEX: OnceLock<Regex> = OnceLock::new();
        STRIKE_REGEX.get_or_init(|| Regex::new(r"~{2}(.+?)~{2}").expect("Invalid strike regex"))
    }
}

impl InlineRule for StrikeRule {
    fn name(&self) -> &'static str {
        "strike"
    }

    fn find(&self, text: &str) -> Option<Range<usize>> {
        Self::regex().find(text).map(|m| m.range())
    }

    fn build(&self, matched: &str) -> InlineNode {
        let content = Self::regex()
            .captures(matched)
            .and_then(|c| c.get(1))
            .map_or("", |m| m.as_str());
        InlineNode::Strike(StrikeString::new(content, true))
    }
}
