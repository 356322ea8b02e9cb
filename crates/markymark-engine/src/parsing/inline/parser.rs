use std::ops::Range;

use super::{
    rule::{InlineRule, SharedInlineRule},
    types::InlineNode,
};

/// Splits `text` into inline nodes using `rules`.
///
/// Each round looks for the match with the lowest start offset across all
/// rules. On equal starts the rule registered first wins. Unmatched gaps are
/// emitted as [`InlineNode::Text`]. Matches never overlap and the scan is a
/// single left-to-right pass; nested content is left for the renderer to
/// expand.
pub fn parse_inline(text: &str, rules: &[SharedInlineRule]) -> Vec<InlineNode> {
    let mut out = vec![];
    let mut rest = text;

    while !rest.is_empty() {
        let Some((rule, range)) = first_match(rest, rules) else {
            out.push(InlineNode::text(rest));
            break;
        };

        if range.start > 0 {
            out.push(InlineNode::text(&rest[..range.start]));
        }
        log::trace!(
            "inline rule {} matched {:?}",
            rule.name(),
            &rest[range.clone()]
        );
        out.push(rule.build(&rest[range.clone()]));
        rest = &rest[range.end..];
    }

    out
}

/// Finds the rule whose match starts earliest in `text`.
fn first_match<'r>(
    text: &str,
    rules: &'r [SharedInlineRule],
) -> Option<(&'r dyn InlineRule, Range<usize>)> {
    let mut best: Option<(&'r dyn InlineRule, Range<usize>)> = None;
    for rule in rules {
        let Some(range) = rule.find(text) else {
            continue;
        };
        if range.is_empty() {
            continue;
        }
        // Strictly lower start replaces; ties keep the earlier rule.
        if best.as_ref().is_none_or(|(_, b)| range.start < b.start) {
            best = Some((rule.as_ref(), range));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::parsing::inline::{
        kinds::{BoldRule, InlineCodeRule, ItalicRule, LinkRule, StrikeRule},
        types::{BoldString, CodeString, ItalicString, StrikeString},
    };

    fn rules() -> Vec<SharedInlineRule> {
        vec![
            Arc::new(StrikeRule),
            Arc::new(ItalicRule),
            Arc::new(BoldRule::asterisk()),
            Arc::new(BoldRule::underscore()),
            Arc::new(LinkRule::default()),
            Arc::new(InlineCodeRule),
        ]
    }

    #[test]
    fn plain_text_is_one_node() {
        assert_eq!(
            parse_inline("hello world", &rules()),
            vec![InlineNode::text("hello world")]
        );
    }

    #[test]
    fn empty_text_has_no_nodes() {
        assert!(parse_inline("", &rules()).is_empty());
    }

    #[test]
    fn no_rules_means_everything_is_text() {
        assert_eq!(
            parse_inline("a **b**", &[]),
            vec![InlineNode::text("a **b**")]
        );
    }

    #[test]
    fn leftmost_match_wins_across_rules() {
        assert_eq!(
            parse_inline("a **b** *c*", &rules()),
            vec![
                InlineNode::text("a "),
                InlineNode::Bold(BoldString::new("b", true)),
                InlineNode::text(" "),
                InlineNode::Italic(ItalicString::new("c", true)),
            ]
        );
    }

    #[test]
    fn trailing_text_is_kept() {
        assert_eq!(
            parse_inline("~~gone~~ for good", &rules()),
            vec![
                InlineNode::Strike(StrikeString::new("gone", true)),
                InlineNode::text(" for good"),
            ]
        );
    }

    #[test]
    fn code_span_is_not_nested() {
        let nodes = parse_inline("run `**x**` now", &rules());
        assert_eq!(
            nodes,
            vec![
                InlineNode::text("run "),
                InlineNode::Code(CodeString::new("**x**", false)),
                InlineNode::text(" now"),
            ]
        );
    }

    #[test]
    fn equal_start_prefers_first_registered_rule() {
        struct Whole(&'static str);
        impl InlineRule for Whole {
            fn name(&self) -> &'static str {
                self.0
            }
            fn find(&self, text: &str) -> Option<Range<usize>> {
                Some(0..text.len())
            }
            fn build(&self, matched: &str) -> InlineNode {
                InlineNode::text(format!("{}:{matched}", self.0))
            }
        }

        let rules: Vec<SharedInlineRule> =
            vec![Arc::new(Whole("first")), Arc::new(Whole("second"))];
        assert_eq!(
            parse_inline("abc", &rules),
            vec![InlineNode::text("first:abc")]
        );
    }

    #[test]
    fn empty_matches_are_ignored() {
        struct Empty;
        impl InlineRule for Empty {
            fn name(&self) -> &'static str {
                "empty"
            }
            fn find(&self, _text: &str) -> Option<Range<usize>> {
                Some(0..0)
            }
            fn build(&self, matched: &str) -> InlineNode {
                InlineNode::text(matched)
            }
        }

        let rules: Vec<SharedInlineRule> = vec![Arc::new(Empty)];
        assert_eq!(parse_inline("abc", &rules), vec![InlineNode::text("abc")]);
    }
}
