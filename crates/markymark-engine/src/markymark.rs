use std::sync::Arc;

use crate::convert::{Converter, InlineConverter};
use crate::error::{BuildError, ConvertError};
use crate::flavor::Flavor;
use crate::parsing::{
    blocks::{BlockParser, BlockRule, ParsedDoc, SharedBlockRule},
    inline::{InlineRule, SharedInlineRule},
};

/// Parser and renderer registries bound together.
///
/// Built once through [`MarkyMark::builder`]; afterwards every method takes
/// `&self` and the instance can be shared.
pub struct MarkyMark<T, I> {
    parser: BlockParser,
    converter: Converter<T, I>,
    inline_converter: InlineConverter<I>,
}

impl<T, I> MarkyMark<T, I> {
    pub fn builder() -> Builder<T, I> {
        Builder::default()
    }

    /// Parses `markdown` and renders one output per top-level block.
    pub fn parse_markdown(&self, markdown: &str) -> Result<Vec<T>, ConvertError> {
        let doc = self.parser.parse(markdown);
        self.converter.convert_all(&doc.blocks, &self.inline_converter)
    }

    /// Parses `markdown` without rendering.
    pub fn parse_blocks(&self, markdown: &str) -> ParsedDoc {
        self.parser.parse(markdown)
    }

    pub fn parser(&self) -> &BlockParser {
        &self.parser
    }

    pub fn converter(&self) -> &Converter<T, I> {
        &self.converter
    }

    pub fn inline_converter(&self) -> &InlineConverter<I> {
        &self.inline_converter
    }
}

/// Collects rules and registries for a [`MarkyMark`].
pub struct Builder<T, I> {
    rules: Vec<SharedBlockRule>,
    inline_rules: Vec<SharedInlineRule>,
    default_rule: Option<SharedBlockRule>,
    converter: Option<Converter<T, I>>,
    inline_converter: Option<InlineConverter<I>>,
}

impl<T, I> Default for Builder<T, I> {
    fn default() -> Self {
        Self {
            rules: vec![],
            inline_rules: vec![],
            default_rule: None,
            converter: None,
            inline_converter: None,
        }
    }
}

impl<T, I> Builder<T, I> {
    /// Appends the flavor's block rules and takes over its inline rules and
    /// default rule.
    pub fn add_flavor(mut self, flavor: &dyn Flavor) -> Self {
        log::debug!("adding flavor {}", flavor.name());
        self.rules.extend(flavor.rules());
        self.inline_rules = flavor.inline_rules();
        self.default_rule = Some(flavor.default_rule());
        self
    }

    pub fn add_rule(mut self, rule: impl BlockRule + Send + Sync + 'static) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    pub fn add_inline_rule(mut self, rule: impl InlineRule + Send + Sync + 'static) -> Self {
        self.inline_rules.push(Arc::new(rule));
        self
    }

    pub fn set_default_rule(mut self, rule: impl BlockRule + Send + Sync + 'static) -> Self {
        self.default_rule = Some(Arc::new(rule));
        self
    }

    pub fn set_converter(mut self, converter: Converter<T, I>) -> Self {
        self.converter = Some(converter);
        self
    }

    pub fn set_inline_converter(mut self, converter: InlineConverter<I>) -> Self {
        self.inline_converter = Some(converter);
        self
    }

    /// Checks that every required piece is present, in the order rules,
    /// default rule, converter, inline converter, and reports the first gap.
    pub fn build(self) -> Result<MarkyMark<T, I>, BuildError> {
        if self.rules.is_empty() {
            return Err(BuildError::NoRules);
        }
        let default_rule = self.default_rule.ok_or(BuildError::NoDefaultRule)?;
        let converter = self.converter.ok_or(BuildError::NoConverter)?;
        let mut inline_converter = self.inline_converter.ok_or(BuildError::NoInlineConverter)?;

        log::debug!(
            "building parser with {} block rules and {} inline rules",
            self.rules.len(),
            self.inline_rules.len()
        );
        inline_converter.set_inline_rules(self.inline_rules);

        Ok(MarkyMark {
            parser: BlockParser::new(self.rules, default_rule),
            converter,
            inline_converter,
        })
    }
}
