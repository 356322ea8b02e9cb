use std::fmt::Write;

use crate::parsing::blocks::{Block, MarkdownList, ParsedDoc};

/// One line per block, prefixed with its line span. List items follow their
/// list, indented by depth. Text is shown `{:?}`-quoted so whitespace and
/// escapes are visible.
pub fn normalize(doc: &ParsedDoc) -> String {
    let mut out = String::new();
    for (block, span) in doc.blocks.iter().zip(&doc.spans) {
        let _ = write!(out, "{}..{} ", span.start, span.end);
        match block {
            Block::Header(h) => {
                let _ = writeln!(out, "Header({}) {:?}", h.level, h.content.content);
            }
            Block::Paragraph(p) => {
                let _ = writeln!(out, "Paragraph {:?}", p.content.content);
            }
            Block::Quote(q) => {
                let _ = writeln!(out, "Quote {:?}", q.content.content);
            }
            Block::CodeBlock(c) => {
                let lang = c.language.as_deref().unwrap_or("-");
                let _ = writeln!(out, "CodeBlock({lang}) {:?}", c.content);
            }
            Block::HorizontalLine(_) => {
                let _ = writeln!(out, "HorizontalLine");
            }
            Block::Image(img) => {
                let _ = writeln!(out, "Image {:?} {:?}", img.alt, img.url);
            }
            Block::List(list) => list_outline(&mut out, list, 0),
        }
    }
    out.truncate(out.trim_end().len());
    out
}

fn list_outline(out: &mut String, list: &MarkdownList, depth: usize) {
    let indent = "  ".repeat(depth);
    let marker = if list.ordered { "ordered" } else { "unordered" };
    if depth > 0 {
        out.push_str(&indent);
    }
    let _ = writeln!(out, "List({marker}, {})", list.level);
    for item in &list.items {
        let _ = writeln!(out, "{indent}  - {:?}", item.text.content);
        for child in &item.children {
            list_outline(out, child, depth + 2);
        }
    }
}
