//! Behavioural tests for the parsing module.
//!
//! Exact structures are asserted with `pretty_assertions`; larger messages
//! are pinned with inline `insta` snapshots of the normalized outline.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    Document,
    blocks::Block,
    inline::InlineSpan,
    parse, parse_message,
    snapshot::{invariants, normalize},
};

fn text(s: &str) -> Vec<InlineSpan> {
    vec![InlineSpan::Text(s.into())]
}

fn outline(md: &str) -> String {
    let doc = parse(md);
    invariants(md, &doc);
    normalize(&doc).to_string()
}

#[test]
fn empty_document() {
    assert_eq!(parse(""), Document::default());
}

#[test]
fn blank_lines_only() {
    assert!(parse("\n\n  \n\t\n").is_empty());
}

#[rstest]
#[case("### Title", 4)]
#[case("## Title", 3)]
#[case("# Title", 2)]
fn heading_precedence(#[case] md: &str, #[case] level: u8) {
    assert_eq!(
        parse(md).blocks,
        vec![Block::Heading {
            level,
            content: text("Title"),
        }]
    );
}

#[test]
fn list_flush_on_blank_line() {
    assert_eq!(
        parse("- a\n- b\n\nc").blocks,
        vec![
            Block::List {
                ordered: false,
                items: vec![text("a"), text("b")],
            },
            Block::Paragraph { content: text("c") },
        ]
    );
}

#[test]
fn bold_before_italic_conflict_resolution() {
    assert_eq!(
        parse("**bold** and *italic*").blocks,
        vec![Block::Paragraph {
            content: vec![
                InlineSpan::Bold("bold".into()),
                InlineSpan::Text(" and ".into()),
                InlineSpan::Italic("italic".into()),
            ],
        }]
    );
}

#[rstest]
#[case("---")]
#[case("***")]
#[case("___")]
fn horizontal_rule_detection(#[case] md: &str) {
    assert_eq!(parse(md).blocks, vec![Block::HorizontalRule]);
}

#[test]
fn two_character_rule_is_a_paragraph() {
    assert_eq!(
        parse("--").blocks,
        vec![Block::Paragraph { content: text("--") }]
    );
}

#[test]
fn link_extraction() {
    assert_eq!(
        parse("[click here](https://example.com)").blocks,
        vec![Block::Paragraph {
            content: vec![InlineSpan::Link {
                text: "click here".into(),
                url: "https://example.com".into(),
            }],
        }]
    );
}

#[test]
fn unterminated_fence_at_end_of_input() {
    assert_eq!(
        parse("```\ncode line").blocks,
        vec![Block::CodeBlock {
            language: None,
            text: "code line".into(),
        }]
    );
}

#[rstest]
#[case("")]
#[case("one line")]
#[case("  indented\n\n\ttabbed")]
#[case("# not a heading\n- not a list")]
#[case("trailing newline\n")]
#[case("a\r")]
#[case("windows\r\nlines\r")]
fn fence_round_trip(#[case] body: &str) {
    let md = format!("```\n{body}\n```");
    assert_eq!(
        parse(&md).blocks,
        vec![Block::CodeBlock {
            language: None,
            text: body.into(),
        }]
    );
}

#[test]
fn fence_language_tag_is_captured() {
    assert_eq!(
        parse("```rust\nfn main() {}\n```").blocks,
        vec![Block::CodeBlock {
            language: Some("rust".into()),
            text: "fn main() {}".into(),
        }]
    );
}

#[test]
fn each_line_is_its_own_paragraph() {
    assert_eq!(
        parse("first\nsecond").blocks,
        vec![
            Block::Paragraph {
                content: text("first")
            },
            Block::Paragraph {
                content: text("second")
            },
        ]
    );
}

#[test]
fn crlf_input_matches_lf_input() {
    let lf = "## Title\n- a\n- b\n\n> quote\n---\ntext";
    assert_eq!(parse(&lf.replace('\n', "\r\n")), parse(lf));
}

#[test]
fn crlf_fences_still_open_and_close() {
    assert_eq!(
        parse("```sh\r\nls\r\n```\r\nafter").blocks,
        vec![
            Block::CodeBlock {
                language: Some("sh".into()),
                text: "ls\r".into(),
            },
            Block::Paragraph {
                content: text("after")
            },
        ]
    );
}

#[test]
fn tilde_fence_is_plain_text() {
    assert_eq!(
        parse("~~~strike~~~ then\nnext line\n- item").blocks,
        vec![
            Block::Paragraph {
                content: text("~~~strike~~~ then")
            },
            Block::Paragraph {
                content: text("next line")
            },
            Block::List {
                ordered: false,
                items: vec![text("item")],
            },
        ]
    );
}

#[test]
fn list_marker_beats_heading_inside_item() {
    assert_eq!(
        parse("- # not a heading").blocks,
        vec![Block::List {
            ordered: false,
            items: vec![text("# not a heading")],
        }]
    );
}

#[test]
fn parse_message_matches_parse() {
    let md = "> quoted *text*";
    assert_eq!(parse_message(md.to_string()), parse(md));
}

#[test]
fn determinism() {
    let md = "## h\n- **a**\n1. `b`\n> [c](d)\n---\n```\ne";
    assert_eq!(parse(md), parse(md));
}

/// Inline code is extracted before emphasis, so markers inside stay literal.
#[test]
fn code_span_shields_emphasis_markers() {
    insta::assert_snapshot!(outline("`*text*` and `**bold**` but *this*"), @r#"
    Paragraph
      Code "*text*"
      Text " and "
      Code "**bold**"
      Text " but "
      Italic "this"
    "#);
}

#[test]
fn mixed_message_outline() {
    let md = r#"## Setup

Install with `cargo install chatmark` then run it.
1. Open a terminal
2. Run **chatmark** on a file
- or pipe _stdin_
> Tip: see [the docs](https://example.com/docs_v2)
***
```python
print("hi")
```"#;

    insta::assert_snapshot!(outline(md), @r#"
    Heading(3)
      Text "Setup"
    Paragraph
      Text "Install with "
      Code "cargo install chatmark"
      Text " then run it."
    List(ordered)
      Item
        Text "Open a terminal"
      Item
        Text "Run "
        Bold "chatmark"
        Text " on a file"
    List(unordered)
      Item
        Text "or pipe "
        Italic "stdin"
    Blockquote
      Text "Tip: see "
      Link "the docs" -> "https://example.com/docs_v2"
    HorizontalRule
    CodeBlock(python) "print(\"hi\")"
    "#);
}

#[test]
fn degraded_markup_outline() {
    let md = "**never closed\n- item\n  two spaces *a * b*\n```js\nlet x = 1;";
    insta::assert_snapshot!(outline(md), @r#"
    Paragraph
      Text "**never closed"
    List(unordered)
      Item
        Text "item"
    Paragraph
      Text "two spaces *a * b*"
    CodeBlock(js) "let x = 1;"
    "#);
}
