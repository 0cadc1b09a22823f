use std::sync::OnceLock;

use regex::Regex;

/// A recognised list item line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListMarker<'a> {
    pub ordered: bool,
    /// Item text after the marker.
    pub text: &'a str,
}

/// List item block type with owned marker syntax.
pub struct ListItem;

impl ListItem {
    /// Bullet characters for unordered items; each must be followed by a space.
    pub const BULLETS: [char; 3] = ['-', '*', '+'];

    pub fn parse(trimmed: &str) -> Option<ListMarker<'_>> {
        if let Some(text) = Self::BULLETS
            .iter()
            .find_map(|b| trimmed.strip_prefix(*b)?.strip_prefix(' '))
        {
            return Some(ListMarker {
                ordered: false,
                text,
            });
        }

        static ORDERED_REGEX: OnceLock<Regex> = OnceLock::new();
        let ordered =
            ORDERED_REGEX.get_or_init(|| Regex::new(r"^\d+\. ").expect("Invalid list marker regex"));
        ordered.find(trimmed).map(|m| ListMarker {
            ordered: true,
            text: &trimmed[m.end()..],
        })
    }
}
