use std::ops::Range;

use crate::parsing::inline::{
    cursor::Cursor,
    rule::InlineRule,
    types::{BoldString, InlineNode},
};

/// Doubled-delimiter emphasis: `**bold**` or `__bold__`.
///
/// The opening pair may appear anywhere. The content is the shortest
/// non-empty run on the same line that is followed by a closing pair which
/// is not itself followed by a third delimiter.
pub struct BoldRule {
    delimiter: u8,
}

impl BoldRule {
    pub const ASTERISK: u8 = b'*';
    pub const UNDERSCORE: u8 = b'_';

    /// # Panics
    /// Panics if `delimiter` is not ASCII.
    pub fn new(delimiter: u8) -> Self {
        assert!(delimiter.is_ascii(), "bold delimiter must be ASCII");
        Self { delimiter }
    }

    pub fn asterisk() -> Self {
        Self::new(Self::ASTERISK)
    }

    pub fn underscore() -> Self {
        Self::new(Self::UNDERSCORE)
    }

    fn pair(&self) -> [u8; 2] {
        [self.delimiter, self.delimiter]
    }

    /// Looks for the closing pair of an opener whose content starts at `from`.
    fn close(&self, text: &str, from: usize) -> Option<usize> {
        let pair = self.pair();
        let mut cur = Cursor::at(text, from);
        // Content must hold at least one byte before a closer can match.
        if cur.eof() || cur.peek() == Some(b'\n') {
            return None;
        }
        cur.bump();
        while !cur.eof() {
            if cur.peek() == Some(b'\n') {
                return None;
            }
            if cur.starts_with(&pair) && cur.peek_ahead(2) != Some(self.delimiter) {
                return Some(cur.pos() + pair.len());
            }
            cur.bump();
        }
        None
    }
}

impl InlineRule for BoldRule {
    fn name(&self) -> &'static str {
        "bold"
    }

    fn find(&self, text: &str) -> Option<Range<usize>> {
        let pair = self.pair();
        let mut cur = Cursor::new(text);
        while !cur.eof() {
            if cur.starts_with(&pair) {
                let start = cur.pos();
                if let Some(end) = self.close(text, start + pair.len()) {
                    return Some(start..end);
                }
            }
            cur.bump();
        }
        None
    }

    fn build(&self, matched: &str) -> InlineNode {
        let inner = matched
            .get(2..matched.len().saturating_sub(2))
            .unwrap_or_default();
        InlineNode::Bold(BoldString::new(inner, true))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("**bold**", Some(0..8))]
    #[case("a **b** c", Some(2..7))]
    #[case("****", None)]
    #[case("**open", None)]
    #[case("**a\nb**", None)]
    #[case("plain", None)]
    fn finds_asterisk_bold(#[case] text: &str, #[case] expected: Option<Range<usize>>) {
        assert_eq!(BoldRule::asterisk().find(text), expected);
    }

    #[test]
    fn closing_pair_followed_by_third_delimiter_is_skipped() {
        // `**a***` closes on the last two asterisks, keeping one in the content
        let rule = BoldRule::asterisk();
        let text = "**a***";
        let range = rule.find(text).unwrap();
        assert_eq!(range, 0..6);
        assert_eq!(
            rule.build(&text[range]),
            InlineNode::Bold(BoldString::new("a*", true))
        );
    }

    #[test]
    fn underscore_variant_ignores_asterisks() {
        let rule = BoldRule::underscore();
        assert_eq!(rule.find("**no** __yes__"), Some(7..14));
    }

    #[test]
    fn build_strips_delimiters_and_nests() {
        let node = BoldRule::asterisk().build("**some *text***");
        assert_eq!(node, InlineNode::Bold(BoldString::new("some *text*", true)));
    }

    #[test]
    fn multibyte_content_is_preserved() {
        let rule = BoldRule::asterisk();
        let text = "ünï **çödé** end";
        let range = rule.find(text).unwrap();
        assert_eq!(
            rule.build(&text[range]),
            InlineNode::Bold(BoldString::new("çödé", true))
        );
    }
}
