/// Bold and italic delimiters.
///
/// Bold delimiters must be extracted before italic ones, otherwise the
/// single-`*` pattern would consume the inner markers of `**bold**`.
///
/// Two rules narrow the plain `*x*` / `_x_` shapes: the content may not start
/// or end with whitespace (`2 * 3 * 4` stays text), and underscore delimiters
/// must sit at word edges (`snake_case_name` stays text).
pub struct Emphasis;

impl Emphasis {
    pub const BOLD_STAR: &'static str = "**";
    pub const BOLD_UNDERSCORE: &'static str = "__";
    pub const ITALIC_STAR: &'static str = "*";
    pub const ITALIC_UNDERSCORE: &'static str = "_";

    /// Underscore delimiters only count at word edges, so `snake_case_names`
    /// stay literal.
    pub fn needs_word_edge(delim: &str) -> bool {
        delim.starts_with('_')
    }
}
