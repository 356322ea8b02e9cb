//! # Flavors
//!
//! A flavor bundles the rule set of one Markdown dialect: the ordered block
//! rules, the ordered inline rules and the default block rule for lines no
//! other rule claims. Rule order is priority order.
//!
//! - **`ContentfulFlavor`**: the full rule set (horizontal lines, block images, strike, inline images)
//! - **`MarkdownFlavor`**: the base dialect with short links

pub mod contentful;
pub mod markdown;

pub use contentful::ContentfulFlavor;
pub use markdown::MarkdownFlavor;

use crate::parsing::{blocks::SharedBlockRule, inline::SharedInlineRule};

/// Names accepted by [`by_name`].
pub const FLAVOR_NAMES: &[&str] = &[ContentfulFlavor::NAME, MarkdownFlavor::NAME];

pub trait Flavor {
    fn name(&self) -> &'static str;

    /// Block rules in priority order.
    fn rules(&self) -> Vec<SharedBlockRule>;

    /// Inline rules in priority order.
    fn inline_rules(&self) -> Vec<SharedInlineRule>;

    /// Applied when no block rule conforms.
    fn default_rule(&self) -> SharedBlockRule;
}

/// Looks up a bundled flavor by its case-insensitive name.
pub fn by_name(name: &str) -> Option<Box<dyn Flavor>> {
    match name.to_ascii_lowercase().as_str() {
        ContentfulFlavor::NAME => Some(Box::new(ContentfulFlavor)),
        MarkdownFlavor::NAME => Some(Box::new(MarkdownFlavor)),
        _ => None,
    }
}
