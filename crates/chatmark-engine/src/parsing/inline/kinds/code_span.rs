/// Code span inline type with owned delimiter constant.
///
/// Code spans are raw zones: they are extracted first, so no other inline
/// pattern ever sees the text between the backticks.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick that delimits code spans.
    pub const TICK: &'static str = "`";
}
