use std::{ops::Range, sync::OnceLock};

use regex::Regex;

use crate::parsing::inline::{
    rule::InlineRule,
    types::{InlineNode, LinkString},
};

/// Inline link: `[text](url)` or `[text](url "title")`.
///
/// A bracket preceded by `!` starts an image, not a link, and is skipped.
/// With `spaced_images` set, `! [` is treated as an image marker too.
pub struct LinkRule {
    spaced_images: bool,
}

impl LinkRule {
    pub const IMAGE_MARKER: char = '!';

    pub fn new(spaced_images: bool) -> Self {
        Self { spaced_images }
    }

    fn regex() -> &'static Regex {
        static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
        LINK_REGEX.get_or_init(|| {
            Regex::new(r#"\[(.+?)\]\((.+?)(?: "(.+?)")?\)"#).expect("Invalid link regex")
        })
    }

    /// True if the text before a candidate match marks it as an image.
    fn is_image(&self, before: &str) -> bool {
        let mut rev = before.chars().rev();
        match rev.next() {
            Some(Self::IMAGE_MARKER) => true,
            Some(c) if self.spaced_images && is_separator(c) => {
                rev.next() == Some(Self::IMAGE_MARKER)
            }
            _ => false,
        }
    }
}

impl Default for LinkRule {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Unicode separator (`\p{Z}`) check for the handful of characters that matter here.
fn is_separator(c: char) -> bool {
    matches!(
        c,
        ' ' | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
    )
}

impl InlineRule for LinkRule {
    fn name(&self) -> &'static str {
        "link"
    }

    fn find(&self, text: &str) -> Option<Range<usize>> {
        let re = Self::regex();
        let mut from = 0;
        while let Some(m) = re.find_at(text, from) {
            if !self.is_image(&text[..m.start()]) {
                return Some(m.range());
            }
            // `[` is one byte, so the next char boundary is right after it.
            from = m.start() + 1;
        }
        None
    }

    fn build(&self, matched: &str) -> InlineNode {
        let Some(caps) = Self::regex().captures(matched) else {
            return InlineNode::Link(LinkString {
                content: String::new(),
                url: String::new(),
                title: None,
                nested: false,
            });
        };
        let group = |i: usize| caps.get(i).map(|m| m.as_str().to_owned());
        InlineNode::Link(LinkString {
            content: group(1).unwrap_or_default(),
            url: group(2).unwrap_or_default(),
            title: group(3),
            nested: false,
        })
    }
}
