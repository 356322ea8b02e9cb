/// A line range `[start, end)` into the original input.
///
/// Every parsed block records the span of lines it was built from, so the
/// spans of a document tile `0..line_count` without gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    /// Index of the first line.
    pub start: usize,
    /// Index one past the last line.
    pub end: usize,
}

impl Span {
    /// Returns the number of lines covered.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span covers no lines.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_counts_lines() {
        assert_eq!(Span { start: 2, end: 5 }.len(), 3);
    }

    #[test]
    fn inverted_span_is_empty() {
        let sp = Span { start: 4, end: 1 };
        assert_eq!(sp.len(), 0);
        assert!(sp.is_empty());
    }
}
