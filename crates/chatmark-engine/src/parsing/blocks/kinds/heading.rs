/// Heading block type with owned marker constants.
///
/// Message headings are shifted down one level: `#` renders as level 2,
/// leaving level 1 to the surrounding page.
pub struct Heading;

impl Heading {
    /// Heading markers in match order (longest first) with their levels.
    pub const MARKERS: [(&'static str, u8); 3] = [("### ", 4), ("## ", 3), ("# ", 2)];

    /// Returns `(level, remainder)` for a trimmed heading line.
    pub fn parse(trimmed: &str) -> Option<(u8, &str)> {
        Self::MARKERS.iter().find_map(|(marker, level)| {
            trimmed
                .strip_prefix(marker)
                .map(|rest| (*level, rest.trim_start()))
        })
    }
}
