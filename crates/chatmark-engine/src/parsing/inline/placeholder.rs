//! Side table of extracted spans and the tokens that stand in for them.
//!
//! A token is `U+E000`, the decimal index into the table, then `U+E001`.
//! Both delimiters are private-use characters; any that already occur in the
//! input are claimed as `Text` entries up front, so every token left in the
//! working text was put there by the table.

use super::types::{InlineSeq, InlineSpan};

pub const TOKEN_OPEN: char = '\u{E000}';
pub const TOKEN_CLOSE: char = '\u{E001}';

/// UTF-8 encoding of [`TOKEN_OPEN`], for byte-level scanning.
pub const TOKEN_OPEN_UTF8: &[u8] = "\u{E000}".as_bytes();

pub fn is_token_char(c: char) -> bool {
    c == TOKEN_OPEN || c == TOKEN_CLOSE
}

/// Spans claimed so far, in claim order.
#[derive(Debug, Default)]
pub struct SideTable {
    spans: Vec<InlineSpan>,
}

impl SideTable {
    /// Records `span` and returns the token that replaces it in the working text.
    pub fn claim(&mut self, span: InlineSpan) -> String {
        let index = self.spans.len();
        self.spans.push(span);
        format!("{TOKEN_OPEN}{index}{TOKEN_CLOSE}")
    }

    pub fn get(&self, index: usize) -> Option<&InlineSpan> {
        self.spans.get(index)
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Builds the initial working text, claiming any literal token delimiters.
    pub fn protect(&mut self, input: &str) -> String {
        if !input.chars().any(is_token_char) {
            return input.to_string();
        }
        let mut out = String::with_capacity(input.len());
        for c in input.chars() {
            if is_token_char(c) {
                let token = self.claim(InlineSpan::Text(c.to_string()));
                out.push_str(&token);
            } else {
                out.push(c);
            }
        }
        out
    }

    /// Splits the working text on tokens, resolving each against the table.
    ///
    /// Adjacent text is merged and empty text is dropped.
    pub fn reassemble(&self, working: &str) -> InlineSeq {
        let mut out = InlineSeq::new();
        let mut rest = working;

        while let Some(open) = rest.find(TOKEN_OPEN) {
            push_text(&mut out, &rest[..open]);
            let after_open = &rest[open + TOKEN_OPEN.len_utf8()..];

            let resolved = after_open.find(TOKEN_CLOSE).and_then(|close| {
                let span = after_open[..close]
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| self.get(index))?;
                Some((span, close))
            });

            match resolved {
                Some((span, close)) => {
                    push_span(&mut out, span.clone());
                    rest = &after_open[close + TOKEN_CLOSE.len_utf8()..];
                }
                None => {
                    // Not one of ours; keep the delimiter as text.
                    push_text(&mut out, &rest[open..open + TOKEN_OPEN.len_utf8()]);
                    rest = after_open;
                }
            }
        }

        push_text(&mut out, rest);
        out
    }
}

fn push_text(out: &mut InlineSeq, text: &str) {
    if !text.is_empty() {
        push_span(out, InlineSpan::Text(text.to_string()));
    }
}

fn push_span(out: &mut InlineSeq, span: InlineSpan) {
    if let InlineSpan::Text(text) = &span {
        if text.is_empty() {
            return;
        }
        if let Some(InlineSpan::Text(prev)) = out.last_mut() {
            prev.push_str(text);
            return;
        }
    }
    out.push(span);
}
