use std::collections::HashMap;

use crate::error::ConvertError;
use crate::parsing::inline::{
    InlineKind, InlineNode, MarkdownString, SharedInlineRule, parse_inline,
};

use super::variant::InlineVariant;

/// Renders one inline variant into `I`.
pub trait InlineDisplayItem<I> {
    type Item: InlineVariant;

    fn create(&self, converter: &InlineConverter<I>, item: &Self::Item) -> Result<I, ConvertError>;
}

type ErasedInlineRenderer<I> = Box<
    dyn Fn(&InlineNode, &InlineConverter<I>) -> Option<Result<I, ConvertError>> + Send + Sync,
>;

/// Inline renderer registry.
///
/// Holds at most one renderer per [`InlineKind`]; registering a second one
/// for the same kind replaces the first. Also owns the inline rules used to
/// expand nested content, so renderers can recurse through
/// [`convert_children`](Self::convert_children).
pub struct InlineConverter<I> {
    renderers: HashMap<InlineKind, ErasedInlineRenderer<I>>,
    rules: Vec<SharedInlineRule>,
}

impl<I> Default for InlineConverter<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> InlineConverter<I> {
    pub fn new() -> Self {
        Self {
            renderers: HashMap::new(),
            rules: vec![],
        }
    }

    pub fn register<D>(&mut self, item: D) -> &mut Self
    where
        D: InlineDisplayItem<I> + Send + Sync + 'static,
    {
        self.insert(
            <D::Item as InlineVariant>::KIND,
            Box::new(move |node: &InlineNode, converter: &InlineConverter<I>| {
                <D::Item as InlineVariant>::from_node(node)
                    .map(|inner| item.create(converter, inner))
            }),
        )
    }

    /// Registers a closure as the renderer for `V`.
    pub fn map<V, F>(&mut self, render: F) -> &mut Self
    where
        V: InlineVariant,
        F: Fn(&InlineConverter<I>, &V) -> Result<I, ConvertError> + Send + Sync + 'static,
    {
        self.insert(
            V::KIND,
            Box::new(move |node: &InlineNode, converter: &InlineConverter<I>| {
                V::from_node(node).map(|inner| render(converter, inner))
            }),
        )
    }

    fn insert(&mut self, kind: InlineKind, renderer: ErasedInlineRenderer<I>) -> &mut Self {
        if self.renderers.insert(kind, renderer).is_some() {
            log::debug!("replaced inline renderer for {kind}");
        } else {
            log::debug!("registered inline renderer for {kind}");
        }
        self
    }

    pub fn has_mapping(&self, kind: InlineKind) -> bool {
        self.renderers.contains_key(&kind)
    }

    pub fn set_inline_rules(&mut self, rules: Vec<SharedInlineRule>) {
        self.rules = rules;
    }

    pub fn inline_rules(&self) -> &[SharedInlineRule] {
        &self.rules
    }

    /// Tokenizes `text` with the installed inline rules.
    pub fn parse_content(&self, text: &str) -> Vec<InlineNode> {
        parse_inline(text, &self.rules)
    }

    pub fn convert(&self, node: &InlineNode) -> Result<I, ConvertError> {
        let kind = node.kind();
        let renderer = self
            .renderers
            .get(&kind)
            .ok_or(ConvertError::NoInlineRenderer(kind))?;
        renderer(node, self).unwrap_or(Err(ConvertError::NoInlineRenderer(kind)))
    }

    /// Converts a payload that is not yet wrapped in an [`InlineNode`].
    pub fn convert_item<V: InlineVariant>(&self, item: &V) -> Result<I, ConvertError> {
        self.convert(&item.clone().into_node())
    }

    /// Converts every node, keeping order.
    pub fn convert_all(&self, nodes: &[InlineNode]) -> Result<Vec<I>, ConvertError> {
        nodes.iter().map(|node| self.convert(node)).collect()
    }

    /// Tokenizes a string's content one level down and converts the result.
    ///
    /// Strings without nested markup have no children and yield an empty list.
    pub fn convert_children<S>(&self, item: &S) -> Result<Vec<I>, ConvertError>
    where
        S: MarkdownString + ?Sized,
    {
        if !item.has_children() {
            return Ok(vec![]);
        }
        self.convert_all(&self.parse_content(item.content()))
    }

    /// Tokenizes and converts raw text in one step.
    pub fn convert_content(&self, text: &str) -> Result<Vec<I>, ConvertError> {
        self.convert_all(&self.parse_content(text))
    }
}
