use std::sync::OnceLock;

use regex::Regex;

use super::types::Block;

/// Matcher and builder for one kind of block.
///
/// Rules are stateless: both `conforms` and `lines_consumed` are pure
/// functions of the window they are given, so a single rule instance can
/// serve any number of parses.
///
/// A rule that conforms must report at least one consumed line, and never
/// more than the window holds. The parser treats a violation as a bug in
/// the rule and panics.
pub trait BlockRule {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    /// Whether the lines at the head of `lines` form this block.
    ///
    /// `lines` is the whole remaining input; rules look only as far as they need.
    fn conforms(&self, lines: &[String]) -> bool;

    /// How many lines at the head of `lines` belong to this block.
    fn lines_consumed(&self, lines: &[String]) -> usize;

    /// Builds the block from exactly the consumed lines.
    fn to_block(&self, lines: &[String]) -> Block;
}

/// A compiled pattern that a single-line rule matches against its whole first line.
pub struct LinePattern {
    source: &'static str,
    cell: OnceLock<Regex>,
}

impl LinePattern {
    /// `source` must be anchored with `^...$`.
    pub const fn new(source: &'static str) -> Self {
        Self {
            source,
            cell: OnceLock::new(),
        }
    }

    pub fn regex(&self) -> &Regex {
        self.cell
            .get_or_init(|| Regex::new(self.source).expect("Invalid block rule regex"))
    }

    /// True if the first line of `lines` matches.
    pub fn matches_first(&self, lines: &[String]) -> bool {
        lines.first().is_some_and(|l| self.regex().is_match(l))
    }
}
