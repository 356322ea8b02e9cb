use crate::parsing::{
    blocks::{
        Block, BlockKind, CodeBlock, Header, HorizontalLine, Image, MarkdownList, Paragraph,
        QuoteBlock,
    },
    inline::{
        BoldString, CodeString, ImageString, InlineKind, InlineNode, InlineString, ItalicString,
        LinkString, StrikeString, TextString,
    },
};

/// A block payload type that renderers can be registered for.
pub trait BlockVariant: 'static {
    const KIND: BlockKind;

    /// Projects `block` onto this payload if it is the matching variant.
    fn from_block(block: &Block) -> Option<&Self>;
}

/// An inline payload type that renderers can be registered for.
pub trait InlineVariant: Clone + 'static {
    const KIND: InlineKind;

    fn from_node(node: &InlineNode) -> Option<&Self>;

    fn into_node(self) -> InlineNode;
}

macro_rules! block_variants {
    ($($ty:ty => $variant:ident,)*) => {$(
        impl BlockVariant for $ty {
            const KIND: BlockKind = BlockKind::$variant;

            fn from_block(block: &Block) -> Option<&Self> {
                match block {
                    Block::$variant(inner) => Some(inner),
                    _ => None,
                }
            }
        }
    )*};
}

macro_rules! inline_variants {
    ($($ty:ty => $variant:ident,)*) => {$(
        impl InlineVariant for $ty {
            const KIND: InlineKind = InlineKind::$variant;

            fn from_node(node: &InlineNode) -> Option<&Self> {
                match node {
                    InlineNode::$variant(inner) => Some(inner),
                    _ => None,
                }
            }

            fn into_node(self) -> InlineNode {
                InlineNode::$variant(self)
            }
        }
    )*};
}

block_variants! {
    Header => Header,
    Paragraph => Paragraph,
    QuoteBlock => Quote,
    CodeBlock => CodeBlock,
    HorizontalLine => HorizontalLine,
    Image => Image,
    MarkdownList => List,
}

inline_variants! {
    TextString => Text,
    InlineString => Plain,
    BoldString => Bold,
    ItalicString => Italic,
    StrikeString => Strike,
    CodeString => Code,
    LinkString => Link,
    ImageString => Image,
}
