pub mod blocks;
pub mod inline;
pub mod snapshot;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use blocks::{Block, BlockBuilder, LineClassifier};

/// The structural result of parsing one message.
///
/// Produced fresh by every [`parse`] call and owned by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

/// Parses message text into a [`Document`].
///
/// Total over all input: malformed markup degrades to literal text, and an
/// unterminated code fence still yields a code block from what was buffered.
pub fn parse(text: &str) -> Document {
    let classifier = LineClassifier;
    let mut builder = BlockBuilder::new();

    // Split on `\n` only, so a `\r` inside a code block is kept verbatim.
    for line in text.split_inclusive('\n') {
        let line = line.strip_suffix('\n').unwrap_or(line);
        builder.push(classifier.classify(line));
    }

    let blocks = builder.finish();
    log::debug!("parsed {} bytes into {} blocks", text.len(), blocks.len());
    Document { blocks }
}

/// Owned-input form of [`parse`], for callers handing over a finished message.
pub fn parse_message(text: String) -> Document {
    parse(&text)
}
