use serde::{Deserialize, Serialize};

/// Ordered inline content of a heading, paragraph, quote or list item.
pub type InlineSeq = Vec<InlineSpan>;

/// A typed fragment of inline text.
///
/// Formatting does not nest: every variant carries plain text only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InlineSpan {
    /// Plain text that isn't part of any special construct.
    Text(String),
    /// `**x**` or `__x__`.
    Bold(String),
    /// `*x*` or `_x_`.
    Italic(String),
    /// A code span (backtick-delimited). This is a raw zone - no parsing inside.
    Code(String),
    /// `[text](url)`.
    Link { text: String, url: String },
}

impl InlineSpan {
    /// The visible text of the span, without markers or link target.
    pub fn text(&self) -> &str {
        match self {
            InlineSpan::Text(s)
            | InlineSpan::Bold(s)
            | InlineSpan::Italic(s)
            | InlineSpan::Code(s) => s,
            InlineSpan::Link { text, .. } => text,
        }
    }
}
