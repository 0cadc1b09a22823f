/// A fence line: the language tag written after the opener, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceSig {
    /// Trimmed text after the backticks; `None` when empty.
    pub language: Option<String>,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    const TICK: char = '`';

    /// Detects a fence on a line that has already been trimmed.
    ///
    /// Only backtick fences count; `~~~` is ordinary text.
    pub fn sig(trimmed: &str) -> Option<FenceSig> {
        if !trimmed.starts_with(Self::BACKTICKS) {
            return None;
        }

        let info = trimmed.trim_start_matches(Self::TICK).trim();
        Some(FenceSig {
            language: (!info.is_empty()).then(|| info.to_string()),
        })
    }
}
