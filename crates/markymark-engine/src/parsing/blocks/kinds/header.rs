use crate::parsing::blocks::{
    rule::{BlockRule, LinePattern},
    types::{Block, Header},
};
use crate::parsing::inline::InlineString;

static HEADER: LinePattern = LinePattern::new(r"^(#{1,6})\s*(.+)$");

/// `#` to `######` followed by the title on a single line.
pub struct HeaderRule;

impl BlockRule for HeaderRule {
    fn name(&self) -> &'static str {
        "header"
    }

    fn conforms(&self, lines: &[String]) -> bool {
        HEADER.matches_first(lines)
    }

    fn lines_consumed(&self, _lines: &[String]) -> usize {
        1
    }

    fn to_block(&self, lines: &[String]) -> Block {
        let line = lines.first().map(String::as_str).unwrap_or_default();
        let (level, content) = match HEADER.regex().captures(line) {
            Some(caps) => (caps[1].len() as u8, caps[2].to_string()),
            None => (1, line.to_string()),
        };
        Block::Header(Header {
            level,
            content: InlineString::new(content, true),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn lines(src: &[&str]) -> Vec<String> {
        src.iter().map(|s| s.to_string()).collect()
    }

    #[rstest]
    #[case("# One", 1, "One")]
    #[case("### Title", 3, "Title")]
    #[case("###### Six", 6, "Six")]
    #[case("##NoSpace", 2, "NoSpace")]
    fn builds_header_with_level(#[case] src: &str, #[case] level: u8, #[case] content: &str) {
        let window = lines(&[src]);
        assert!(HeaderRule.conforms(&window));
        assert_eq!(HeaderRule.lines_consumed(&window), 1);
        assert_eq!(
            HeaderRule.to_block(&window),
            Block::Header(Header {
                level,
                content: InlineString::new(content, true),
            })
        );
    }

    #[rstest]
    #[case("Title###")]
    #[case("#")]
    #[case("plain text")]
    #[case("")]
    fn rejects_non_headers(#[case] src: &str) {
        assert!(!HeaderRule.conforms(&lines(&[src])));
    }

    #[test]
    fn only_first_line_is_inspected() {
        assert!(!HeaderRule.conforms(&lines(&["text", "# Header"])));
    }
}
