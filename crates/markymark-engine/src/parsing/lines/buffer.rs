use super::span::Span;

/// Holder for the Markdown lines that still have to be parsed.
///
/// Lines are only ever removed from the front, in the amounts a block rule
/// reports as consumed.
#[derive(Debug, Clone, Default)]
pub struct MarkdownLines {
    lines: Vec<String>,
    /// Index of the first line that has not been consumed yet.
    next: usize,
}

impl MarkdownLines {
    /// Splits `markdown` on `\n`.
    ///
    /// Trailing empty lines are dropped, so `"a\n"` holds one line and the
    /// empty string holds none. `\r\n` is not normalised.
    pub fn new(markdown: &str) -> Self {
        let mut lines: Vec<String> = markdown.split('\n').map(str::to_owned).collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        Self { lines, next: 0 }
    }

    /// Returns true if there are no lines left.
    pub fn is_empty(&self) -> bool {
        self.next >= self.lines.len()
    }

    /// Number of lines left.
    pub fn len(&self) -> usize {
        self.lines.len() - self.next
    }

    /// Total number of lines the buffer started with.
    pub fn total(&self) -> usize {
        self.lines.len()
    }

    /// All remaining lines.
    pub fn window(&self) -> &[String] {
        &self.lines[self.next..]
    }

    /// The first `count` remaining lines.
    ///
    /// # Panics
    /// Panics if `count` exceeds the number of remaining lines.
    pub fn peek(&self, count: usize) -> &[String] {
        assert!(
            count <= self.len(),
            "peeked {count} lines but only {} remain",
            self.len()
        );
        &self.lines[self.next..self.next + count]
    }

    /// Drops `count` lines from the front and returns the span they covered.
    ///
    /// # Panics
    /// Panics if `count` exceeds the number of remaining lines.
    pub fn consume(&mut self, count: usize) -> Span {
        assert!(
            count <= self.len(),
            "consumed {count} lines but only {} remain",
            self.len()
        );
        let start = self.next;
        self.next += count;
        Span {
            start,
            end: self.next,
        }
    }
}
