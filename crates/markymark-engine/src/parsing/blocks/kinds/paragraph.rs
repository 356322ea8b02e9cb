use crate::parsing::blocks::{
    rule::BlockRule,
    types::{Block, Paragraph},
};
use crate::parsing::inline::InlineString;

/// Catch-all for lines no other rule claims. Always one line.
pub struct ParagraphRule;

impl BlockRule for ParagraphRule {
    fn name(&self) -> &'static str {
        "paragraph"
    }

    fn conforms(&self, _lines: &[String]) -> bool {
        true
    }

    fn lines_consumed(&self, _lines: &[String]) -> usize {
        1
    }

    fn to_block(&self, lines: &[String]) -> Block {
        let line = lines.first().cloned().unwrap_or_default();
        Block::Paragraph(Paragraph {
            content: InlineString::new(line, true),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn takes_a_single_line_verbatim() {
        let window = vec!["first **line**".to_string(), "second".to_string()];
        assert!(ParagraphRule.conforms(&window));
        assert_eq!(ParagraphRule.lines_consumed(&window), 1);
        assert_eq!(
            ParagraphRule.to_block(&window[..1]),
            Block::Paragraph(Paragraph {
                content: InlineString::new("first **line**", true),
            })
        );
    }

    #[test]
    fn blank_line_is_an_empty_paragraph() {
        let window = vec![String::new()];
        assert!(ParagraphRule.conforms(&window));
        assert_eq!(
            ParagraphRule.to_block(&window),
            Block::Paragraph(Paragraph {
                content: InlineString::new("", true),
            })
        );
    }
}
