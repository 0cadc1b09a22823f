use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, Link},
    placeholder::{SideTable, TOKEN_OPEN_UTF8},
    types::{InlineSeq, InlineSpan},
};

/// One extraction pass over the working text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pass {
    CodeSpan,
    Link,
    Bold(&'static str),
    Italic(&'static str),
}

/// Extraction order. Code spans claim their text before anything else can
/// see it, bold always runs before italic, and links go last.
const PASSES: [Pass; 6] = [
    Pass::CodeSpan,
    Pass::Bold(Emphasis::BOLD_STAR),
    Pass::Bold(Emphasis::BOLD_UNDERSCORE),
    Pass::Italic(Emphasis::ITALIC_STAR),
    Pass::Italic(Emphasis::ITALIC_UNDERSCORE),
    Pass::Link,
];

/// Parses one block's inline content into a sequence of [`InlineSpan`]s.
///
/// Each pass scans the working text left to right for non-overlapping
/// matches, records every match in a [`SideTable`] and replaces it with an
/// opaque token. Tokens are inert to later passes, so text is never claimed
/// twice. Once all passes have run, the working text is split back on its
/// tokens.
///
/// Never fails: markup that doesn't close is left as literal text.
pub fn parse_inline(s: &str) -> InlineSeq {
    let mut table = SideTable::default();
    let mut working = table.protect(s);

    for pass in PASSES {
        working = extract(pass, &working, &mut table);
    }

    table.reassemble(&working)
}

fn extract(pass: Pass, s: &str, table: &mut SideTable) -> String {
    let mut cur = Cursor::new(s);
    let mut out = String::with_capacity(s.len());
    let mut text_start = 0;

    let emphasis = matches!(pass, Pass::Bold(_) | Pass::Italic(_));

    while !cur.eof() {
        if emphasis && skip_link_target(&mut cur) {
            continue;
        }
        let start = cur.pos();
        if let Some(span) = try_parse(pass, &mut cur) {
            out.push_str(&s[text_start..start]);
            out.push_str(&table.claim(span));
            text_start = cur.pos();
            continue;
        }
        cur.bump();
    }

    out.push_str(&s[text_start..]);
    out
}

fn try_parse(pass: Pass, cur: &mut Cursor<'_>) -> Option<InlineSpan> {
    match pass {
        Pass::CodeSpan => {
            try_parse_delimited(cur, CodeSpan::TICK, false).map(|t| InlineSpan::Code(t.into()))
        }
        Pass::Link => try_parse_link(cur),
        Pass::Bold(delim) => {
            try_parse_delimited(cur, delim, true).map(|t| InlineSpan::Bold(t.into()))
        }
        Pass::Italic(delim) => {
            try_parse_delimited(cur, delim, true).map(|t| InlineSpan::Italic(t.into()))
        }
    }
}

/// Attempts to parse `delim inner delim` starting at the current position.
///
/// `inner` must be non-empty and token-free. Emphasis content must also not
/// start or end with whitespace, and underscore delimiters must sit at word
/// edges. On failure, cursor position is restored.
fn try_parse_delimited<'a>(
    cur: &mut Cursor<'a>,
    delim: &str,
    emphasis: bool,
) -> Option<&'a str> {
    let d = delim.as_bytes();
    if !cur.starts_with(d) {
        return None;
    }

    let word_edge = emphasis && Emphasis::needs_word_edge(delim);
    if word_edge && cur.prev_char().is_some_and(char::is_alphanumeric) {
        return None;
    }

    let saved = cur.clone();
    cur.bump_n(d.len());
    let inner_start = cur.pos();

    while !cur.eof() && !cur.starts_with(d) && !cur.starts_with(TOKEN_OPEN_UTF8) {
        if emphasis && skip_link_target(cur) {
            continue;
        }
        cur.bump();
    }
    let inner = cur.slice_from(inner_start);

    let well_formed = cur.starts_with(d)
        && !inner.is_empty()
        && (!emphasis
            || !(inner.starts_with(char::is_whitespace) || inner.ends_with(char::is_whitespace)));
    if !well_formed {
        *cur = saved;
        return None;
    }
    cur.bump_n(d.len());

    if word_edge && cur.next_char().is_some_and(char::is_alphanumeric) {
        *cur = saved;
        return None;
    }

    Some(inner)
}

/// Steps over a `](url)` link target so emphasis never opens or closes
/// inside a url. Leaves the cursor alone and returns `false` when the
/// cursor isn't on a complete target.
fn skip_link_target(cur: &mut Cursor<'_>) -> bool {
    if !cur.starts_with(Link::TEXT_CLOSE_URL_OPEN) {
        return false;
    }

    let mut ahead = cur.clone();
    ahead.bump_n(Link::TEXT_CLOSE_URL_OPEN.len());
    while let Some(b) = ahead.peek() {
        if b == Link::URL_CLOSE {
            ahead.bump();
            *cur = ahead;
            return true;
        }
        if b.is_ascii_whitespace() || ahead.starts_with(TOKEN_OPEN_UTF8) {
            break;
        }
        ahead.bump();
    }
    false
}

/// Attempts to parse `[text](url)` starting at the current position.
///
/// `text` must be non-empty and free of brackets; `url` must be non-empty and
/// free of whitespace. On failure, cursor position is restored.
fn try_parse_link(cur: &mut Cursor<'_>) -> Option<InlineSpan> {
    if cur.peek() != Some(Link::TEXT_OPEN) {
        return None;
    }

    let saved = cur.clone();
    cur.bump(); // [
    let text_start = cur.pos();

    while let Some(b) = cur.peek() {
        if b == Link::TEXT_CLOSE || b == Link::TEXT_OPEN || cur.starts_with(TOKEN_OPEN_UTF8) {
            break;
        }
        cur.bump();
    }
    let text = cur.slice_from(text_start);

    if text.is_empty() || !cur.starts_with(Link::TEXT_CLOSE_URL_OPEN) {
        *cur = saved;
        return None;
    }
    cur.bump_n(Link::TEXT_CLOSE_URL_OPEN.len());
    let url_start = cur.pos();

    while let Some(b) = cur.peek() {
        if b == Link::URL_CLOSE || b.is_ascii_whitespace() || cur.starts_with(TOKEN_OPEN_UTF8) {
            break;
        }
        cur.bump();
    }
    let url = cur.slice_from(url_start);

    if url.is_empty() || cur.peek() != Some(Link::URL_CLOSE) {
        *cur = saved;
        return None;
    }
    cur.bump(); // )

    Some(InlineSpan::Link {
        text: text.into(),
        url: url.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn text(s: &str) -> InlineSpan {
        InlineSpan::Text(s.into())
    }

    #[test]
    fn parse_simple_text() {
        assert_eq!(parse_inline("hello world"), vec![text("hello world")]);
    }

    #[test]
    fn empty_input_is_empty() {
        assert!(parse_inline("").is_empty());
    }

    #[test]
    fn bold_before_italic() {
        assert_eq!(
            parse_inline("**bold** and *italic*"),
            vec![
                InlineSpan::Bold("bold".into()),
                text(" and "),
                InlineSpan::Italic("italic".into()),
            ]
        );
    }

    #[test]
    fn underscore_variants() {
        assert_eq!(
            parse_inline("__bold__ _italic_"),
            vec![
                InlineSpan::Bold("bold".into()),
                text(" "),
                InlineSpan::Italic("italic".into()),
            ]
        );
    }

    #[test]
    fn parse_code_span() {
        assert_eq!(
            parse_inline("run `cargo test` now"),
            vec![
                text("run "),
                InlineSpan::Code("cargo test".into()),
                text(" now"),
            ]
        );
    }

    #[rstest]
    #[case("`*text*`", "*text*")]
    #[case("`**bold**`", "**bold**")]
    #[case("`[a](b)`", "[a](b)")]
    #[case("`snake_case_`", "snake_case_")]
    fn code_span_suppresses_other_markup(#[case] input: &str, #[case] code: &str) {
        assert_eq!(parse_inline(input), vec![InlineSpan::Code(code.into())]);
    }

    #[test]
    fn parse_link() {
        assert_eq!(
            parse_inline("[click here](https://example.com)"),
            vec![InlineSpan::Link {
                text: "click here".into(),
                url: "https://example.com".into(),
            }]
        );
    }

    #[test]
    fn underscores_in_url_are_not_emphasis() {
        assert_eq!(
            parse_inline("see [docs](https://x.io/a_b_c) _now_"),
            vec![
                text("see "),
                InlineSpan::Link {
                    text: "docs".into(),
                    url: "https://x.io/a_b_c".into(),
                },
                text(" "),
                InlineSpan::Italic("now".into()),
            ]
        );
    }

    #[test]
    fn bold_wraps_link() {
        assert_eq!(
            parse_inline("**see [docs](u)**"),
            vec![InlineSpan::Bold("see [docs](u)".into())]
        );
    }

    #[test]
    fn italic_wraps_link() {
        assert_eq!(
            parse_inline("*see [docs](u)*"),
            vec![InlineSpan::Italic("see [docs](u)".into())]
        );
    }

    #[test]
    fn emphasis_markers_in_url_are_not_emphasis() {
        assert_eq!(
            parse_inline("[a](https://x.io/_p_/*q*) *b*"),
            vec![
                InlineSpan::Link {
                    text: "a".into(),
                    url: "https://x.io/_p_/*q*".into(),
                },
                text(" "),
                InlineSpan::Italic("b".into()),
            ]
        );
    }

    #[test]
    fn link_after_emphasis_in_same_line() {
        assert_eq!(
            parse_inline("**a** [b](c)"),
            vec![
                InlineSpan::Bold("a".into()),
                text(" "),
                InlineSpan::Link {
                    text: "b".into(),
                    url: "c".into(),
                },
            ]
        );
    }

    #[test]
    fn several_matches_in_one_pass() {
        assert_eq!(
            parse_inline("*a* *b*"),
            vec![
                InlineSpan::Italic("a".into()),
                text(" "),
                InlineSpan::Italic("b".into()),
            ]
        );
    }

    #[rstest]
    #[case("a * b")]
    #[case("2 * 3 * 4")]
    #[case("**unclosed")]
    #[case("`unclosed code")]
    #[case("[text](no close")]
    #[case("[text] (spaced)")]
    #[case("[](empty)")]
    #[case("[empty]()")]
    #[case("[a](b c)")]
    #[case("snake_case_name")]
    #[case("****")]
    #[case("``")]
    fn unmatched_markup_is_literal(#[case] input: &str) {
        assert_eq!(parse_inline(input), vec![text(input)]);
    }

    #[test]
    fn emphasis_cannot_span_a_code_span() {
        assert_eq!(
            parse_inline("**a `x` b**"),
            vec![text("**a "), InlineSpan::Code("x".into()), text(" b**")]
        );
    }

    #[test]
    fn multibyte_text_is_preserved() {
        assert_eq!(
            parse_inline("héllo **wörld** ✨"),
            vec![
                text("héllo "),
                InlineSpan::Bold("wörld".into()),
                text(" ✨"),
            ]
        );
    }

    #[test]
    fn literal_token_characters_cannot_forge_spans() {
        let input = "\u{E000}0\u{E001} **b**";
        assert_eq!(
            parse_inline(input),
            vec![
                text("\u{E000}0\u{E001} "),
                InlineSpan::Bold("b".into()),
            ]
        );
    }

    #[test]
    fn bracket_inside_link_text_restarts() {
        assert_eq!(
            parse_inline("[a [b](u)"),
            vec![
                text("[a "),
                InlineSpan::Link {
                    text: "b".into(),
                    url: "u".into(),
                },
            ]
        );
    }
}
