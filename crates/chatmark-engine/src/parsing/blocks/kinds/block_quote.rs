/// Blockquote block type with owned delimiter constant.
///
/// Quotes are single-level: a nested `> >` keeps its inner marker as text.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix, including its mandatory space.
    pub const PREFIX: &'static str = "> ";

    /// Returns the quoted remainder of a trimmed line.
    pub fn strip_prefix(trimmed: &str) -> Option<&str> {
        trimmed.strip_prefix(Self::PREFIX)
    }
}
