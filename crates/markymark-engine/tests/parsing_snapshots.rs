use insta::assert_snapshot;
use markymark_engine::{
    BlockParser, ContentfulFlavor, Flavor, MarkdownFlavor, ParsedDoc, snapshot,
};

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}

fn parse_fixture(flavor: &dyn Flavor, name: &str) -> ParsedDoc {
    let md = read_fixture(name);
    let doc = BlockParser::new(flavor.rules(), flavor.default_rule()).parse(&md);
    snapshot::invariants(&doc);
    doc
}

#[test]
fn fixture_lists() {
    let doc = parse_fixture(&ContentfulFlavor, "lists");
    assert_snapshot!(snapshot::normalize(&doc), @r#"
    0..4 List(unordered, 0)
      - "A"
      - "B"
        List(unordered, 1)
          - "C"
          - "D"
    4..5 Paragraph ""
    5..9 List(ordered, 0)
      - "one"
        List(unordered, 1)
          - "nested"
            List(ordered, 2)
              - "deep"
      - "two"
    "#);
}

#[test]
fn fixture_document_contentful() {
    let doc = parse_fixture(&ContentfulFlavor, "document");
    assert_snapshot!(snapshot::normalize(&doc), @r#"
    0..1 Header(1) "MarkyMark"
    1..2 Paragraph "Line-based **Markdown** parsing."
    2..3 Paragraph ""
    3..4 Quote " Quoted *text*"
    4..5 HorizontalLine
    5..6 Image "Diagram" "docs/diagram.png"
    6..9 CodeBlock(rust) "fn main() {}\n"
    9..10 Header(6) "Small print"
    10..11 Paragraph "Title###"
    "#);
}

#[test]
fn fixture_document_markdown() {
    let doc = parse_fixture(&MarkdownFlavor, "document");
    assert_snapshot!(snapshot::normalize(&doc), @r#"
    0..1 Header(1) "MarkyMark"
    1..2 Paragraph "Line-based **Markdown** parsing."
    2..3 Paragraph ""
    3..4 Quote " Quoted *text*"
    4..5 Paragraph "---"
    5..6 Paragraph "![Diagram](docs/diagram.png)"
    6..9 CodeBlock(rust) "fn main() {}\n"
    9..10 Header(6) "Small print"
    10..11 Paragraph "Title###"
    "#);
}

/// An unterminated fence is not an error: it swallows the rest of the input.
#[test]
fn fixture_unterminated_fence() {
    let doc = parse_fixture(&ContentfulFlavor, "unterminated_fence");
    assert_snapshot!(snapshot::normalize(&doc), @r#"
    0..1 Paragraph "intro"
    1..4 CodeBlock(-) "still code\n- not a list\n"
    "#);
}

#[test]
fn crlf_is_left_to_the_caller() {
    let flavor = ContentfulFlavor;
    let doc = BlockParser::new(flavor.rules(), flavor.default_rule()).parse("# A\r\nb\r\n");
    assert_snapshot!(snapshot::normalize(&doc), @r#"
    0..1 Header(1) "A\r"
    1..2 Paragraph "b\r"
    "#);
}
