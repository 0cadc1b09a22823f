use serde::{Deserialize, Serialize};

use crate::parsing::inline::InlineSeq;

/// A top-level structural unit of a parsed message.
///
/// Blocks are self-contained: none refers to another, and all text is owned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Block {
    /// A heading; `level` is always 2, 3 or 4.
    Heading { level: u8, content: InlineSeq },
    /// A single non-blank line that no other block kind claimed.
    Paragraph { content: InlineSeq },
    /// A fenced code block. `text` keeps interior newlines verbatim.
    CodeBlock {
        language: Option<String>,
        text: String,
    },
    /// A run of list items sharing the same orderedness. Never empty.
    List {
        ordered: bool,
        items: Vec<InlineSeq>,
    },
    /// A single quoted line.
    Blockquote { content: InlineSeq },
    HorizontalRule,
}

impl Block {
    /// Short variant name, used for logging and outlines.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Block::Heading { .. } => "Heading",
            Block::Paragraph { .. } => "Paragraph",
            Block::CodeBlock { .. } => "CodeBlock",
            Block::List { .. } => "List",
            Block::Blockquote { .. } => "Blockquote",
            Block::HorizontalRule => "HorizontalRule",
        }
    }
}
