use std::borrow::Cow;

use crate::convert::{Converter, InlineConverter};
use crate::error::{BuildError, ConvertError};
use crate::flavor::Flavor;
use crate::markymark::MarkyMark;
use crate::parsing::{
    blocks::{CodeBlock, Header, HorizontalLine, Image, MarkdownList, Paragraph, QuoteBlock},
    inline::{
        BoldString, CodeString, ImageString, InlineString, ItalicString, LinkString,
        StrikeString, TextString,
    },
};

/// Output settings for the HTML renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Escape `<`, `>` and `&` in text content. Attribute values are always escaped.
    pub escape_text: bool,
    /// Prepended to a code block's language to form its `class`.
    pub code_class_prefix: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            escape_text: true,
            code_class_prefix: "language-".to_string(),
        }
    }
}

fn text<'a>(escape: bool, raw: &'a str) -> Cow<'a, str> {
    if escape {
        html_escape::encode_text(raw)
    } else {
        Cow::Borrowed(raw)
    }
}

fn attr(raw: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(raw)
}

/// Renders a block's inline content as one string.
fn inline_html(
    inline: &InlineConverter<String>,
    content: &InlineString,
) -> Result<String, ConvertError> {
    inline.convert_item(content)
}

fn list_html(list: &MarkdownList, inline: &InlineConverter<String>) -> Result<String, ConvertError> {
    let tag = if list.ordered { "ol" } else { "ul" };
    let mut html = format!("<{tag}>");
    for item in &list.items {
        html.push_str("<li>");
        html.push_str(&inline_html(inline, &item.text)?);
        for child in &item.children {
            html.push_str(&list_html(child, inline)?);
        }
        html.push_str("</li>");
    }
    html.push_str(&format!("</{tag}>"));
    Ok(html)
}

/// Block renderers for every block variant.
pub fn block_converter(options: &HtmlOptions) -> Converter<String, String> {
    let escape = options.escape_text;
    let code_class_prefix = options.code_class_prefix.clone();

    let mut converter = Converter::new();
    converter
        .map::<Header, _>(|h, inline| {
            Ok(format!(
                "<h{0}>{1}</h{0}>",
                h.level,
                inline_html(inline, &h.content)?
            ))
        })
        .map::<Paragraph, _>(|p, inline| {
            if p.content.content.trim().is_empty() {
                return Ok(String::new());
            }
            Ok(format!("<p>{}</p>", inline_html(inline, &p.content)?))
        })
        .map::<QuoteBlock, _>(|q, inline| {
            let trimmed = InlineString::new(q.content.content.trim(), q.content.nested);
            Ok(format!(
                "<blockquote>{}</blockquote>",
                inline_html(inline, &trimmed)?
            ))
        })
        .map::<CodeBlock, _>(move |c, _| {
            let class = match &c.language {
                Some(lang) => format!(
                    " class=\"{}{}\"",
                    attr(&code_class_prefix),
                    attr(lang)
                ),
                None => String::new(),
            };
            Ok(format!(
                "<pre><code{class}>{}</code></pre>",
                text(escape, &c.content)
            ))
        })
        .map::<HorizontalLine, _>(|_, _| Ok("<hr />".to_string()))
        .map::<Image, _>(|img, _| {
            Ok(format!(
                "<img src=\"{}\" alt=\"{}\" />",
                attr(&img.url),
                attr(&img.alt)
            ))
        })
        .map::<MarkdownList, _>(list_html);
    converter
}

/// Inline renderers for every inline variant.
pub fn inline_converter(options: &HtmlOptions) -> InlineConverter<String> {
    let escape = options.escape_text;

    let mut converter = InlineConverter::new();
    converter
        .map::<TextString, _>(move |_, t| Ok(text(escape, &t.content).into_owned()))
        .map::<InlineString, _>(|c, s| Ok(c.convert_children(s)?.concat()))
        .map::<BoldString, _>(|c, b| {
            Ok(format!("<strong>{}</strong>", c.convert_children(b)?.concat()))
        })
        .map::<ItalicString, _>(|c, i| {
            Ok(format!("<em>{}</em>", c.convert_children(i)?.concat()))
        })
        .map::<StrikeString, _>(|c, s| {
            Ok(format!("<del>{}</del>", c.convert_children(s)?.concat()))
        })
        .map::<CodeString, _>(move |_, code| {
            Ok(format!("<code>{}</code>", text(escape, &code.content)))
        })
        .map::<LinkString, _>(move |_, link| {
            let title = match &link.title {
                Some(title) => format!(" title=\"{}\"", attr(title)),
                None => String::new(),
            };
            Ok(format!(
                "<a href=\"{}\"{title}>{}</a>",
                attr(&link.url),
                text(escape, &link.content)
            ))
        })
        .map::<ImageString, _>(|_, img| {
            Ok(format!(
                "<img src=\"{}\" alt=\"{}\" />",
                attr(&img.url),
                attr(&img.alt)
            ))
        });
    converter
}

/// A ready HTML pipeline for `flavor`.
pub fn pipeline(
    flavor: &dyn Flavor,
    options: &HtmlOptions,
) -> Result<MarkyMark<String, String>, BuildError> {
    MarkyMark::builder()
        .add_flavor(flavor)
        .set_converter(block_converter(options))
        .set_inline_converter(inline_converter(options))
        .build()
}

/// Joins rendered blocks into a document, one block per line, skipping the
/// empty output of blank paragraphs.
pub fn join(blocks: &[String]) -> String {
    blocks
        .iter()
        .filter(|b| !b.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n")
}
