use std::fmt;

use crate::parsing::{inline::InlineString, lines::Span};

/// Tag of a [`Block`] variant, used as the block renderer registry key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BlockKind {
    Header,
    Paragraph,
    Quote,
    CodeBlock,
    HorizontalLine,
    Image,
    List,
}

impl BlockKind {
    pub fn name(self) -> &'static str {
        match self {
            BlockKind::Header => "Header",
            BlockKind::Paragraph => "Paragraph",
            BlockKind::Quote => "Quote",
            BlockKind::CodeBlock => "CodeBlock",
            BlockKind::HorizontalLine => "HorizontalLine",
            BlockKind::Image => "Image",
            BlockKind::List => "List",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `# Title` through `###### Title`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// 1 to 6, the number of leading `#`.
    pub level: u8,
    pub content: InlineString,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    pub content: InlineString,
}

/// A `>` line. Only the text after the marker run is kept; repeated markers
/// do not nest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteBlock {
    pub content: InlineString,
}

/// Fenced code. Content is raw text with every fence marker removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    pub content: String,
    /// Info string after the opening fence, e.g. `rust`.
    pub language: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HorizontalLine;

/// A line consisting only of `![alt](url)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub url: String,
    pub alt: String,
}

/// An ordered or unordered list. Sub-lists hang off the item they follow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownList {
    pub ordered: bool,
    /// Nesting depth; 0 for the outermost list.
    pub level: usize,
    pub items: Vec<ListItem>,
}

impl MarkdownList {
    pub fn new(ordered: bool, level: usize) -> Self {
        Self {
            ordered,
            level,
            items: vec![],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub text: InlineString,
    pub children: Vec<MarkdownList>,
}

impl ListItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: InlineString::new(text, true),
            children: vec![],
        }
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// A structural unit of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Header(Header),
    Paragraph(Paragraph),
    Quote(QuoteBlock),
    CodeBlock(CodeBlock),
    HorizontalLine(HorizontalLine),
    Image(Image),
    List(MarkdownList),
}

impl Block {
    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Header(_) => BlockKind::Header,
            Block::Paragraph(_) => BlockKind::Paragraph,
            Block::Quote(_) => BlockKind::Quote,
            Block::CodeBlock(_) => BlockKind::CodeBlock,
            Block::HorizontalLine(_) => BlockKind::HorizontalLine,
            Block::Image(_) => BlockKind::Image,
            Block::List(_) => BlockKind::List,
        }
    }
}

/// Output of a block parse.
#[derive(Debug, Clone, Default)]
pub struct ParsedDoc {
    /// Blocks in source order.
    pub blocks: Vec<Block>,
    /// Input lines each block was built from, parallel to `blocks`.
    pub spans: Vec<Span>,
    /// Number of input lines after splitting.
    pub line_count: usize,
}
