use std::fmt;

use serde::Serialize;

use crate::parsing::{
    Document,
    blocks::Block,
    inline::{InlineSeq, InlineSpan},
};

/// One line of the outline plus the nodes nested under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapNode {
    pub label: String,
    pub children: Vec<SnapNode>,
}

/// A document outline for snapshot comparisons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snap {
    pub blocks: Vec<SnapNode>,
}

impl SnapNode {
    fn leaf(label: String) -> Self {
        Self {
            label,
            children: vec![],
        }
    }

    fn write_indented(&self, lines: &mut Vec<String>, depth: usize) {
        lines.push(format!("{}{}", "  ".repeat(depth), self.label));
        for child in &self.children {
            child.write_indented(lines, depth + 1);
        }
    }
}

impl fmt::Display for Snap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = vec![];
        for block in &self.blocks {
            block.write_indented(&mut lines, 0);
        }
        f.write_str(&lines.join("\n"))
    }
}

pub fn normalize(doc: &Document) -> Snap {
    Snap {
        blocks: doc.blocks.iter().map(block_node).collect(),
    }
}

fn block_node(block: &Block) -> SnapNode {
    match block {
        Block::Heading { level, content } => SnapNode {
            label: format!("Heading({level})"),
            children: inline_nodes(content),
        },
        Block::Paragraph { content } => SnapNode {
            label: "Paragraph".into(),
            children: inline_nodes(content),
        },
        Block::CodeBlock { language, text } => {
            let label = match language {
                Some(lang) => format!("CodeBlock({lang}) {text:?}"),
                None => format!("CodeBlock {text:?}"),
            };
            SnapNode::leaf(label)
        }
        Block::List { ordered, items } => SnapNode {
            label: if *ordered {
                "List(ordered)".into()
            } else {
                "List(unordered)".into()
            },
            children: items
                .iter()
                .map(|item| SnapNode {
                    label: "Item".into(),
                    children: inline_nodes(item),
                })
                .collect(),
        },
        Block::Blockquote { content } => SnapNode {
            label: "Blockquote".into(),
            children: inline_nodes(content),
        },
        Block::HorizontalRule => SnapNode::leaf("HorizontalRule".into()),
    }
}

fn inline_nodes(seq: &InlineSeq) -> Vec<SnapNode> {
    seq.iter()
        .map(|span| {
            SnapNode::leaf(match span {
                InlineSpan::Text(s) => format!("Text {s:?}"),
                InlineSpan::Bold(s) => format!("Bold {s:?}"),
                InlineSpan::Italic(s) => format!("Italic {s:?}"),
                InlineSpan::Code(s) => format!("Code {s:?}"),
                InlineSpan::Link { text, url } => format!("Link {text:?} -> {url:?}"),
            })
        })
        .collect()
}
