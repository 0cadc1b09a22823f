use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::parsing::{
    Document,
    blocks::Block,
    inline::{InlineSeq, InlineSpan},
};

/// Renders a document as HTML, one block per line.
///
/// All text and attribute values are escaped.
pub fn to_html(doc: &Document) -> String {
    let mut out = String::new();
    for block in doc {
        render_block(&mut out, block);
        out.push('\n');
    }
    out
}

fn render_block(out: &mut String, block: &Block) {
    match block {
        Block::Heading { level, content } => {
            out.push_str(&format!("<h{level}>"));
            render_inline(out, content);
            out.push_str(&format!("</h{level}>"));
        }
        Block::Paragraph { content } => {
            out.push_str("<p>");
            render_inline(out, content);
            out.push_str("</p>");
        }
        Block::CodeBlock { language, text } => {
            match language {
                Some(lang) => out.push_str(&format!(
                    "<pre><code class=\"language-{}\">",
                    encode_double_quoted_attribute(lang)
                )),
                None => out.push_str("<pre><code>"),
            }
            out.push_str(&encode_text(text));
            out.push_str("</code></pre>");
        }
        Block::List { ordered, items } => {
            let tag = if *ordered { "ol" } else { "ul" };
            out.push_str(&format!("<{tag}>"));
            for item in items {
                out.push_str("<li>");
                render_inline(out, item);
                out.push_str("</li>");
            }
            out.push_str(&format!("</{tag}>"));
        }
        Block::Blockquote { content } => {
            out.push_str("<blockquote><p>");
            render_inline(out, content);
            out.push_str("</p></blockquote>");
        }
        Block::HorizontalRule => out.push_str("<hr>"),
    }
}

fn render_inline(out: &mut String, seq: &InlineSeq) {
    for span in seq {
        match span {
            InlineSpan::Text(s) => out.push_str(&encode_text(s)),
            InlineSpan::Bold(s) => wrap(out, "strong", s),
            InlineSpan::Italic(s) => wrap(out, "em", s),
            InlineSpan::Code(s) => wrap(out, "code", s),
            InlineSpan::Link { text, url } => {
                out.push_str(&format!(
                    "<a href=\"{}\">{}</a>",
                    encode_double_quoted_attribute(url),
                    encode_text(text)
                ));
            }
        }
    }
}

fn wrap(out: &mut String, tag: &str, text: &str) {
    out.push_str(&format!("<{tag}>{}</{tag}>", encode_text(text)));
}
