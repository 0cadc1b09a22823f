use super::kinds::{BlockQuote, CodeFence, FenceSig, Heading, ListItem, ThematicBreak};

/// What a single line looks like, judged without any surrounding context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Fence(FenceSig),
    Heading { level: u8, text: String },
    ThematicBreak,
    BlockQuote { text: String },
    ListItem { ordered: bool, text: String },
    Blank,
    Paragraph { text: String },
}

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently.
/// The builder decides what the class means given its current mode, so a
/// line inside a code fence still carries its verbatim `raw` text.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// The line without its `\n`, otherwise untouched (a `\r` stays).
    pub raw: String,
    pub kind: LineKind,
}

impl LineClass {
    pub fn is_fence(&self) -> bool {
        matches!(self.kind, LineKind::Fence(_))
    }
}

/// Classifies individual lines for the block parsing phase.
pub struct LineClassifier;

impl LineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// Checks run in fixed priority order: fence, heading, horizontal rule,
    /// blockquote, list item, blank, paragraph. The first match wins.
    pub fn classify(&self, line: &str) -> LineClass {
        let trimmed = line.trim();

        let kind = if let Some(sig) = CodeFence::sig(trimmed) {
            LineKind::Fence(sig)
        } else if let Some((level, text)) = Heading::parse(trimmed) {
            LineKind::Heading {
                level,
                text: text.to_string(),
            }
        } else if ThematicBreak::matches(trimmed) {
            LineKind::ThematicBreak
        } else if let Some(text) = BlockQuote::strip_prefix(trimmed) {
            LineKind::BlockQuote {
                text: text.trim_start().to_string(),
            }
        } else if let Some(marker) = ListItem::parse(trimmed) {
            LineKind::ListItem {
                ordered: marker.ordered,
                text: marker.text.trim_start().to_string(),
            }
        } else if trimmed.is_empty() {
            LineKind::Blank
        } else {
            LineKind::Paragraph {
                text: trimmed.to_string(),
            }
        };

        LineClass {
            raw: line.to_string(),
            kind,
        }
    }
}
