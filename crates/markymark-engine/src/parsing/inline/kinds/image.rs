use std::{ops::Range, sync::OnceLock};

use regex::Regex;

use crate::parsing::inline::{
    rule::InlineRule,
    types::{ImageString, InlineNode},
};

/// Image inside running text: `![alt](url)`.
pub struct InlineImageRule;

impl InlineImageRule {
    fn regex() -> &'static Regex {
        static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
        IMAGE_REGEX
            .get_or_init(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").expect("Invalid inline image regex"))
    }
}

impl InlineRule for InlineImageRule {
    fn name(&self) -> &'static str {
        "image"
    }

    fn find(&self, text: &str) -> Option<Range<usize>> {
        Self::regex().find(text).map(|m| m.range())
    }

    fn build(&self, matched: &str) -> InlineNode {
        let caps = Self::regex().captures(matched);
        let group = |i: usize| {
            caps.as_ref()
                .and_then(|c| c.get(i))
                .map_or_else(String::new, |m| m.as_str().to_owned())
        };
        InlineNode::Image(ImageString {
            content: matched.to_owned(),
            alt: group(1),
            url: group(2),
            nested: false,
        })
    }
}
