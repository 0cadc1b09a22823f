use std::sync::OnceLock;

use regex::Regex;

/// Horizontal rule: a line made only of three or more of the same `-`, `*` or `_`.
pub struct ThematicBreak;

impl ThematicBreak {
    pub fn matches(trimmed: &str) -> bool {
        static RULE_REGEX: OnceLock<Regex> = OnceLock::new();
        let rule = RULE_REGEX.get_or_init(|| {
            Regex::new(r"^(?:-{3,}|\*{3,}|_{3,})$").expect("Invalid thematic break regex")
        });
        rule.is_match(trimmed)
    }
}
