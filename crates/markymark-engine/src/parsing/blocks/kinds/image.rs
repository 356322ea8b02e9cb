use crate::parsing::blocks::{
    rule::{BlockRule, LinePattern},
    types::{Block, Image},
};

static IMAGE: LinePattern = LinePattern::new(r"^!\p{Z}?\[(.+?)\]\((.+?)\)$");

/// A line holding nothing but `![alt](url)`.
pub struct ImageRule;

impl BlockRule for ImageRule {
    fn name(&self) -> &'static str {
        "image"
    }

    fn conforms(&self, lines: &[String]) -> bool {
        IMAGE.matches_first(lines)
    }

    fn lines_consumed(&self, _lines: &[String]) -> usize {
        1
    }

    fn to_block(&self, lines: &[String]) -> Block {
        let line = lines.first().map(String::as_str).unwrap_or_default();
        match IMAGE.regex().captures(line) {
            Some(caps) => Block::Image(Image {
                alt: caps[1].to_string(),
                url: caps[2].to_string(),
            }),
            None => Block::Image(Image {
                alt: String::new(),
                url: line.to_string(),
            }),
        }
    }
}
