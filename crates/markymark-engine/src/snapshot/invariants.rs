use crate::parsing::blocks::{Block, MarkdownList, ParsedDoc};

/// Checks the structural invariants of a parse.
///
/// - one span per block, each non-empty
/// - spans are contiguous and cover every input line exactly once
/// - header levels are within 1..=6
/// - every sub-list is deeper than its parent and has at least one item
///
/// # Panics
///
/// Panics with a description of the first violated invariant.
pub fn check(doc: &ParsedDoc) {
    assert_eq!(
        doc.blocks.len(),
        doc.spans.len(),
        "block and span counts differ"
    );

    let mut next = 0;
    for span in &doc.spans {
        assert_eq!(span.start, next, "span {span:?} does not start at line {next}");
        assert!(!span.is_empty(), "empty span {span:?}");
        next = span.end;
    }
    assert_eq!(
        next, doc.line_count,
        "spans cover {next} lines of {}",
        doc.line_count
    );

    for block in &doc.blocks {
        match block {
            Block::Header(h) => assert!(
                (1..=6).contains(&h.level),
                "header level {} out of range",
                h.level
            ),
            Block::List(list) => check_list(list),
            _ => {}
        }
    }
}

fn check_list(list: &MarkdownList) {
    for item in &list.items {
        for child in &item.children {
            assert!(
                child.level > list.level,
                "sub-list level {} not deeper than parent level {}",
                child.level,
                list.level
            );
            assert!(!child.items.is_empty(), "empty sub-list at level {}", child.level);
            check_list(child);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::lines::Span;

    #[test]
    fn empty_doc_is_valid() {
        check(&ParsedDoc::default());
    }

    #[test]
    #[should_panic(expected = "spans cover 1 lines of 2")]
    fn uncovered_lines_are_reported() {
        let doc = ParsedDoc {
            blocks: vec![Block::HorizontalLine(Default::default())],
            spans: vec![Span { start: 0, end: 1 }],
            line_count: 2,
        };
        check(&doc);
    }
}
