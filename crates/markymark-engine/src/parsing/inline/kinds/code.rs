use std::{ops::Range, sync::OnceLock};

use regex::Regex;

use crate::parsing::inline::{
    rule::InlineRule,
    types::{CodeString, InlineNode},
};

/// Inline code: `` `code` ``.
///
/// Code spans are raw: their content is never tokenized again.
pub struct InlineCodeRule;

impl InlineCodeRule {
    fn regex() -> &'static Regex {
        static CODE_REGEX: OnceLock<Regex> = OnceLock::new();
        CODE_REGEX.get_or_init(|| Regex::new(r"`(.*?)`").expect("Invalid inline code regex"))
    }
}

impl InlineRule for InlineCodeRule {
    fn name(&self) -> &'static str {
        "code"
    }

    fn find(&self, text: &str) -> Option<Range<usize>> {
        Self::regex().find(text).map(|m| m.range())
    }

    fn build(&self, matched: &str) -> InlineNode {
        let content = Self::regex()
            .captures(matched)
            .and_then(|c| c.get(1))
            .map_or("", |m| m.as_str());
        InlineNode::Code(CodeString::new(content, false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_shortest_span() {
        assert_eq!(InlineCodeRule.find("`a` and `b`"), Some(0..3));
    }

    #[test]
    fn empty_span_still_matches_backticks() {
        assert_eq!(InlineCodeRule.find("``"), Some(0..2));
        assert_eq!(
            InlineCodeRule.build("``"),
            InlineNode::Code(CodeString::new("", false))
        );
    }

    #[test]
    fn unclosed_span_does_not_match() {
        assert_eq!(InlineCodeRule.find("`unclosed"), None);
    }
}
