use std::{ops::Range, sync::OnceLock};

use regex::Regex;

use crate::parsing::inline::{
    rule::InlineRule,
    types::{InlineNode, LinkString},
};

/// Autolink: `<https://example.com>`.
///
/// With the URL check enabled only `<scheme://...>` is accepted, so inline
/// HTML such as `<br>` is left alone.
pub struct ShortLinkRule {
    check_url: bool,
}

impl ShortLinkRule {
    pub fn new(check_url: bool) -> Self {
        Self { check_url }
    }

    fn regex(&self) -> &'static Regex {
        static CHECKED: OnceLock<Regex> = OnceLock::new();
        static SIMPLE: OnceLock<Regex> = OnceLock::new();
        if self.check_url {
            CHECKED.get_or_init(|| {
                Regex::new(r"<(\w+://[^\s/$.?#].[^\s]*)>").expect("Invalid short link regex")
            })
        } else {
            SIMPLE.get_or_init(|| Regex::new(r"<(.+?)>").expect("Invalid short link regex"))
        }
    }
}

impl Default for ShortLinkRule {
    fn default() -> Self {
        Self::new(true)
    }
}

impl InlineRule for ShortLinkRule {
    fn name(&self) -> &'static str {
        "short-link"
    }

    fn find(&self, text: &str) -> Option<Range<usize>> {
        self.regex().find(text).map(|m| m.range())
    }

    fn build(&self, matched: &str) -> InlineNode {
        let url = self
            .regex()
            .captures(matched)
            .and_then(|c| c.get(1))
            .map_or("", |m| m.as_str());
        InlineNode::Link(LinkString {
            content: url.to_owned(),
            url: url.to_owned(),
            title: Some(url.to_owned()),
            nested: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_check_rejects_plain_tags() {
        let rule = ShortLinkRule::default();
        assert_eq!(rule.find("line<br>break"), None);
        assert_eq!(rule.find("go <https://example.com> now"), Some(3..24));
    }

    #[test]
    fn simple_pattern_accepts_anything_bracketed() {
        assert_eq!(ShortLinkRule::new(false).find("a <b> c"), Some(2..5));
    }

    #[test]
    fn url_becomes_text_and_title() {
        match ShortLinkRule::default().build("<ftp://files.example.com>") {
            InlineNode::Link(link) => {
                assert_eq!(link.content, "ftp://files.example.com");
                assert_eq!(link.url, "ftp://files.example.com");
                assert_eq!(link.title.as_deref(), Some("ftp://files.example.com"));
            }
            other => panic!("expected Link, got {other:?}"),
        }
    }
}
