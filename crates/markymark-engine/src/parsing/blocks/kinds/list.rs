use regex::Captures;

use crate::parsing::blocks::{
    rule::{BlockRule, LinePattern},
    types::{Block, ListItem, MarkdownList},
};

/// Leading whitespace characters per nesting level.
pub const INDENT_SIZE: usize = 2;

static ORDERED_START: LinePattern = LinePattern::new(r"^\s{0,3}\d+\.\s+.+$");
static UNORDERED_START: LinePattern = LinePattern::new(r"^\s{0,3}-\s+[^*].*$");
static ORDERED_ITEM: LinePattern = LinePattern::new(r"^(\s*)\d+\.\s+(.+)$");
static UNORDERED_ITEM: LinePattern = LinePattern::new(r"^(\s*)-\s+([^*].*)$");

/// One list line reduced to what the tree builder needs.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ListLine {
    level: usize,
    ordered: bool,
    text: String,
}

impl ListLine {
    fn parse(line: &str) -> Option<Self> {
        if let Some(caps) = ORDERED_ITEM.regex().captures(line) {
            return Some(Self::from_captures(&caps, true));
        }
        UNORDERED_ITEM
            .regex()
            .captures(line)
            .map(|caps| Self::from_captures(&caps, false))
    }

    fn from_captures(caps: &Captures<'_>, ordered: bool) -> Self {
        Self {
            level: caps[1].chars().count() / INDENT_SIZE,
            ordered,
            text: caps[2].trim().to_string(),
        }
    }
}

/// Position in the list lines, threaded through the recursive build.
struct ListCursor<'a> {
    lines: &'a [ListLine],
    pos: usize,
}

impl<'a> ListCursor<'a> {
    fn new(lines: &'a [ListLine]) -> Self {
        Self { lines, pos: 0 }
    }

    fn current(&self) -> Option<&'a ListLine> {
        self.lines.get(self.pos)
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn remaining(&self) -> usize {
        self.lines.len().saturating_sub(self.pos)
    }
}

/// Ordered (`1.`) and unordered (`-`) lists, nested by indentation.
///
/// The first line may be indented by at most three spaces. Every directly
/// following line that looks like a list item at any indentation belongs to
/// the same block.
pub struct ListRule;

impl ListRule {
    /// Fills `list` with items at `level`, descending into a child list on
    /// deeper lines and returning on the first shallower one.
    fn fill(cursor: &mut ListCursor<'_>, list: &mut MarkdownList, level: usize) {
        while let Some(line) = cursor.current() {
            if line.level > level {
                let mut child = MarkdownList::new(line.ordered, line.level);
                Self::fill(cursor, &mut child, line.level);
                match list.items.last_mut() {
                    Some(parent) => parent.children.push(child),
                    None => list.items.extend(child.items),
                }
            } else if line.level == level {
                list.items.push(ListItem::new(line.text.as_str()));
                cursor.advance();
            } else {
                return;
            }
        }
    }
}

impl BlockRule for ListRule {
    fn name(&self) -> &'static str {
        "list"
    }

    fn conforms(&self, lines: &[String]) -> bool {
        ORDERED_START.matches_first(lines) || UNORDERED_START.matches_first(lines)
    }

    fn lines_consumed(&self, lines: &[String]) -> usize {
        if lines.is_empty() {
            return 0;
        }
        let following = lines
            .iter()
            .skip(1)
            .take_while(|l| {
                ORDERED_ITEM.regex().is_match(l) || UNORDERED_ITEM.regex().is_match(l)
            })
            .count();
        1 + following
    }

    fn to_block(&self, lines: &[String]) -> Block {
        let parsed: Vec<ListLine> = lines.iter().filter_map(|l| ListLine::parse(l)).collect();
        let Some(first) = parsed.first() else {
            return Block::List(MarkdownList::new(false, 0));
        };

        let mut root = MarkdownList::new(first.ordered, 0);
        let mut cursor = ListCursor::new(&parsed);
        Self::fill(&mut cursor, &mut root, first.level);

        if cursor.remaining() > 0 {
            log::debug!(
                "list: {} line(s) dedented below the first item were not built",
                cursor.remaining()
            );
        }

        Block::List(root)
    }
}
