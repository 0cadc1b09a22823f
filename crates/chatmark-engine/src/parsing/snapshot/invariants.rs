use crate::parsing::{
    Document,
    blocks::Block,
    inline::{InlineSeq, InlineSpan, placeholder::is_token_char},
};

/// Validates parser output invariants.
///
/// Asserts that:
/// - Heading levels are 2, 3 or 4
/// - Lists are never empty
/// - Inline sequences contain no empty `Text` and no two adjacent `Text` spans
/// - No placeholder token survives into output that didn't contain one
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(source: &str, doc: &Document) {
    let source_has_token_chars = source.chars().any(is_token_char);

    for (i, b) in doc.blocks.iter().enumerate() {
        match b {
            Block::Heading { level, content } => {
                assert!(
                    (2..=4).contains(level),
                    "block {i}: heading level out of range: {level}"
                );
                check_inline(i, content, source_has_token_chars);
            }
            Block::Paragraph { content } | Block::Blockquote { content } => {
                check_inline(i, content, source_has_token_chars);
            }
            Block::List { items, .. } => {
                assert!(!items.is_empty(), "block {i}: empty list");
                for item in items {
                    check_inline(i, item, source_has_token_chars);
                }
            }
            Block::CodeBlock { .. } | Block::HorizontalRule => {}
        }
    }
}

fn check_inline(i: usize, seq: &InlineSeq, source_has_token_chars: bool) {
    for pair in seq.windows(2) {
        assert!(
            !matches!(pair, [InlineSpan::Text(_), InlineSpan::Text(_)]),
            "block {i}: adjacent text spans not merged: {pair:?}"
        );
    }
    for span in seq {
        if let InlineSpan::Text(t) = span {
            assert!(!t.is_empty(), "block {i}: empty text span");
        }
        if !source_has_token_chars {
            assert!(
                !span.text().chars().any(is_token_char),
                "block {i}: placeholder token leaked into {span:?}"
            );
        }
    }
}
