use std::collections::HashMap;

use crate::error::ConvertError;
use crate::parsing::blocks::{Block, BlockKind};

use super::{inline::InlineConverter, variant::BlockVariant};

/// Renders one block variant into `T`, using `I` for its inline content.
pub trait DisplayItem<T, I> {
    type Item: BlockVariant;

    fn create(&self, inline: &InlineConverter<I>, item: &Self::Item) -> Result<T, ConvertError>;
}

type ErasedBlockRenderer<T, I> = Box<
    dyn Fn(&Block, &InlineConverter<I>) -> Option<Result<T, ConvertError>> + Send + Sync,
>;

/// Block renderer registry.
///
/// Keyed by [`BlockKind`]. Registering a renderer for a kind that already
/// has one replaces it. Populate it once, then share it read-only.
pub struct Converter<T, I> {
    renderers: HashMap<BlockKind, ErasedBlockRenderer<T, I>>,
}

impl<T, I> Default for Converter<T, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, I> Converter<T, I> {
    pub fn new() -> Self {
        Self {
            renderers: HashMap::new(),
        }
    }

    pub fn register<D>(&mut self, item: D) -> &mut Self
    where
        D: DisplayItem<T, I> + Send + Sync + 'static,
    {
        self.insert(
            <D::Item as BlockVariant>::KIND,
            Box::new(move |block: &Block, inline: &InlineConverter<I>| {
                <D::Item as BlockVariant>::from_block(block)
                    .map(|inner| item.create(inline, inner))
            }),
        )
    }

    /// Registers a closure as the renderer for `V`.
    pub fn map<V, F>(&mut self, render: F) -> &mut Self
    where
        V: BlockVariant,
        F: Fn(&V, &InlineConverter<I>) -> Result<T, ConvertError> + Send + Sync + 'static,
    {
        self.insert(
            V::KIND,
            Box::new(move |block: &Block, inline: &InlineConverter<I>| {
                V::from_block(block).map(|inner| render(inner, inline))
            }),
        )
    }

    fn insert(&mut self, kind: BlockKind, renderer: ErasedBlockRenderer<T, I>) -> &mut Self {
        if self.renderers.insert(kind, renderer).is_some() {
            log::debug!("replaced block renderer for {kind}");
        } else {
            log::debug!("registered block renderer for {kind}");
        }
        self
    }

    pub fn has_mapping(&self, kind: BlockKind) -> bool {
        self.renderers.contains_key(&kind)
    }

    /// Dispatches `block` to the renderer registered for its variant.
    pub fn convert(&self, block: &Block, inline: &InlineConverter<I>) -> Result<T, ConvertError> {
        let kind = block.kind();
        let renderer = self
            .renderers
            .get(&kind)
            .ok_or(ConvertError::NoRenderer(kind))?;
        renderer(block, inline).unwrap_or(Err(ConvertError::NoRenderer(kind)))
    }

    /// Converts every block, one output per input, in order.
    pub fn convert_all(
        &self,
        blocks: &[Block],
        inline: &InlineConverter<I>,
    ) -> Result<Vec<T>, ConvertError> {
        blocks
            .iter()
            .map(|block| self.convert(block, inline))
            .collect()
    }
}
