use std::ops::Range;

use crate::parsing::inline::{
    cursor::Cursor,
    rule::InlineRule,
    types::{InlineNode, ItalicString},
};

/// Single-asterisk emphasis: `*italic*`.
///
/// Neither the opening nor the closing asterisk may touch another asterisk,
/// which keeps `**bold**` out of this rule.
pub struct ItalicRule;

impl ItalicRule {
    pub const STAR: u8 = b'*';

    fn is_lone_star(cur: &Cursor<'_>) -> bool {
        cur.peek() == Some(Self::STAR)
            && cur.peek_back() != Some(Self::STAR)
            && cur.peek_ahead(1) != Some(Self::STAR)
    }

    fn close(text: &str, from: usize) -> Option<usize> {
        let mut cur = Cursor::at(text, from);
        if cur.eof() || cur.peek() == Some(b'\n') {
            return None;
        }
        cur.bump();
        while !cur.eof() {
            if cur.peek() == Some(b'\n') {
                return None;
            }
            if Self::is_lone_star(&cur) {
                return Some(cur.pos() + 1);
            }
            cur.bump();
        }
        None
    }
}

impl InlineRule for ItalicRule {
    fn name(&self) -> &'static str {
        "italic"
    }

    fn find(&self, text: &str) -> Option<Range<usize>> {
        let mut cur = Cursor::new(text);
        while !cur.eof() {
            if Self::is_lone_star(&cur) {
                let start = cur.pos();
                if let Some(end) = Self::close(text, start + 1) {
                    return Some(start..end);
                }
            }
            cur.bump();
        }
        None
    }

    fn build(&self, matched: &str) -> InlineNode {
        let inner = matched
            .get(1..matched.len().saturating_sub(1))
            .unwrap_or_default();
        InlineNode::Italic(ItalicString::new(inner, true))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("*it*", Some(0..4))]
    #[case("a **b** *c*", Some(8..11))]
    #[case("**bold**", None)]
    #[case("* *", Some(0..3))]
    #[case("*open", None)]
    #[case("**", None)]
    fn finds_italic(#[case] text: &str, #[case] expected: Option<Range<usize>>) {
        assert_eq!(ItalicRule.find(text), expected);
    }

    #[test]
    fn content_may_contain_bold() {
        let text = "*a **b** c*";
        let range = ItalicRule.find(text).unwrap();
        assert_eq!(range, 0..text.len());
        assert_eq!(
            ItalicRule.build(&text[range]),
            InlineNode::Italic(ItalicString::new("a **b** c", true))
        );
    }
}
