//! Property-based tests over generated documents.
//!
//! Lines are drawn from fragments that hit every block rule, including
//! unterminated fences and dedented list lines.

use markymark_engine::{
    BlockParser, ContentfulFlavor, Flavor, HtmlOptions, MarkdownFlavor, render::html::pipeline,
    snapshot,
};
use proptest::prelude::*;

fn line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "#{1,7} ?[a-z ]{0,8}",
        "-{2,5}",
        ">{1,3} ?[a-z*]{0,6}",
        "( ){0,5}- [a-z*]{1,5}",
        "( ){0,5}[0-9]{1,2}\\. [a-z]{1,5}",
        "```[a-z]{0,4}",
        "!\\[[a-z]{0,3}\\]\\([a-z.]{0,5}\\)",
        "[a-z*_~`\\[\\]()!<> ]{0,16}",
    ]
}

fn document_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(line_strategy(), 0..24).prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn spans_cover_every_line(md in document_strategy()) {
        for flavor in [&ContentfulFlavor as &dyn Flavor, &MarkdownFlavor] {
            let doc = BlockParser::new(flavor.rules(), flavor.default_rule()).parse(&md);
            snapshot::invariants(&doc);
            let consumed: usize = doc.spans.iter().map(|s| s.len()).sum();
            prop_assert_eq!(consumed, doc.line_count);
        }
    }

    #[test]
    fn bundled_renderers_cover_every_block(md in document_strategy()) {
        let markymark = pipeline(&ContentfulFlavor, &HtmlOptions::default()).unwrap();
        let doc = markymark.parse_blocks(&md);
        let out = markymark.parse_markdown(&md);
        prop_assert!(out.is_ok(), "{:?}", out.as_ref().err());
        prop_assert_eq!(out.unwrap().len(), doc.blocks.len());
    }
}
