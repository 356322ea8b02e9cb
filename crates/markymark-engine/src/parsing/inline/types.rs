use std::fmt;

/// Common view over every inline string variant.
///
/// Children are never stored. A string whose `has_children` is true is
/// re-tokenized when it is rendered; otherwise its content is rendered
/// verbatim.
pub trait MarkdownString {
    /// Raw textual content, with the variant's own delimiters removed.
    fn content(&self) -> &str;
    /// Whether the content may contain nested inline markup.
    fn has_children(&self) -> bool;
}

macro_rules! markdown_strings {
    ($($(#[$doc:meta])* $name:ident;)*) => {$(
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            pub content: String,
            pub nested: bool,
        }

        impl $name {
            pub fn new(content: impl Into<String>, nested: bool) -> Self {
                Self {
                    content: content.into(),
                    nested,
                }
            }
        }

        impl MarkdownString for $name {
            fn content(&self) -> &str {
                &self.content
            }

            fn has_children(&self) -> bool {
                self.nested
            }
        }
    )*};
}

markdown_strings! {
    /// Literal text between inline matches.
    TextString;
    /// Content owned by a block node (paragraph, header, quote, list item).
    InlineString;
    BoldString;
    ItalicString;
    StrikeString;
    /// Inline code span. Rendered verbatim.
    CodeString;
}

/// A `[text](url "title")` link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkString {
    /// The link text.
    pub content: String,
    pub url: String,
    pub title: Option<String>,
    pub nested: bool,
}

impl MarkdownString for LinkString {
    fn content(&self) -> &str {
        &self.content
    }

    fn has_children(&self) -> bool {
        self.nested
    }
}

/// A `![alt](url)` image inside running text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageString {
    /// The full matched source, e.g. `![logo](logo.png)`.
    pub content: String,
    pub alt: String,
    pub url: String,
    pub nested: bool,
}

impl MarkdownString for ImageString {
    fn content(&self) -> &str {
        &self.content
    }

    fn has_children(&self) -> bool {
        self.nested
    }
}

/// Tag of an [`InlineNode`] variant, used as the inline renderer registry key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InlineKind {
    Text,
    Plain,
    Bold,
    Italic,
    Strike,
    Code,
    Link,
    Image,
}

impl InlineKind {
    pub fn name(self) -> &'static str {
        match self {
            InlineKind::Text => "Text",
            InlineKind::Plain => "Plain",
            InlineKind::Bold => "Bold",
            InlineKind::Italic => "Italic",
            InlineKind::Strike => "Strike",
            InlineKind::Code => "Code",
            InlineKind::Link => "Link",
            InlineKind::Image => "Image",
        }
    }
}

impl fmt::Display for InlineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A typed span of inline markup produced by the tokenizer or held by a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    Text(TextString),
    Plain(InlineString),
    Bold(BoldString),
    Italic(ItalicString),
    Strike(StrikeString),
    Code(CodeString),
    Link(LinkString),
    Image(ImageString),
}

impl InlineNode {
    /// Shorthand for a literal, non-nested text node.
    pub fn text(content: impl Into<String>) -> Self {
        InlineNode::Text(TextString::new(content, false))
    }

    pub fn kind(&self) -> InlineKind {
        match self {
            InlineNode::Text(_) => InlineKind::Text,
            InlineNode::Plain(_) => InlineKind::Plain,
            InlineNode::Bold(_) => InlineKind::Bold,
            InlineNode::Italic(_) => InlineKind::Italic,
            InlineNode::Strike(_) => InlineKind::Strike,
            InlineNode::Code(_) => InlineKind::Code,
            InlineNode::Link(_) => InlineKind::Link,
            InlineNode::Image(_) => InlineKind::Image,
        }
    }

    /// The node viewed through the common [`MarkdownString`] interface.
    pub fn as_markdown_string(&self) -> &dyn MarkdownString {
        match self {
            InlineNode::Text(s) => s,
            InlineNode::Plain(s) => s,
            InlineNode::Bold(s) => s,
            InlineNode::Italic(s) => s,
            InlineNode::Strike(s) => s,
            InlineNode::Code(s) => s,
            InlineNode::Link(s) => s,
            InlineNode::Image(s) => s,
        }
    }

    pub fn content(&self) -> &str {
        self.as_markdown_string().content()
    }

    pub fn has_children(&self) -> bool {
        self.as_markdown_string().has_children()
    }
}
