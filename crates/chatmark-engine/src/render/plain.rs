use crate::parsing::{
    Document,
    blocks::Block,
    inline::{InlineSeq, InlineSpan},
};

/// Flattens a document to plain text with all inline markers removed.
///
/// Blocks are separated by a blank line. List items keep a `- ` or `N. `
/// prefix, rules become `---`, and links render as `text (url)` unless the
/// text already is the url.
pub fn to_plain_text(doc: &Document) -> String {
    doc.iter().map(block_text).collect::<Vec<_>>().join("\n\n")
}

fn block_text(block: &Block) -> String {
    match block {
        Block::Heading { content, .. }
        | Block::Paragraph { content }
        | Block::Blockquote { content } => inline_text(content),
        Block::CodeBlock { text, .. } => text.clone(),
        Block::List { ordered, items } => items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                if *ordered {
                    format!("{}. {}", i + 1, inline_text(item))
                } else {
                    format!("- {}", inline_text(item))
                }
            })
            .collect::<Vec<_>>()
            .join("\n"),
        Block::HorizontalRule => "---".to_string(),
    }
}

fn inline_text(seq: &InlineSeq) -> String {
    seq.iter()
        .map(|span| match span {
            InlineSpan::Link { text, url } if text != url => format!("{text} ({url})"),
            other => other.text().to_string(),
        })
        .collect()
}
