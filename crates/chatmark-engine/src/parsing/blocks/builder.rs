use crate::parsing::inline::parse_inline;

use super::{
    classify::{LineClass, LineKind},
    kinds::FenceSig,
    types::Block,
};

/// What the builder is in the middle of.
///
/// Only one multi-line construct can be open at a time: a code fence or a
/// list run. Everything else is emitted as soon as its line is seen.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Mode {
    Scanning,
    InCodeBlock {
        language: Option<String>,
        buffer: String,
    },
    InList {
        ordered: bool,
        /// Raw item text; inline formatting happens when the run is flushed.
        items: Vec<String>,
    },
}

/// Line-at-a-time state machine turning [`LineClass`]es into [`Block`]s.
pub struct BlockBuilder {
    mode: Mode,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            mode: Mode::Scanning,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: LineClass) {
        if matches!(self.mode, Mode::InCodeBlock { .. }) {
            if c.is_fence() {
                self.close_code_block();
            } else {
                self.consume_code_line(&c.raw);
            }
            return;
        }

        match c.kind {
            LineKind::Fence(sig) => {
                self.flush_list();
                self.open_code_block(sig);
            }
            LineKind::Heading { level, text } => {
                self.flush_list();
                self.emit(Block::Heading {
                    level,
                    content: parse_inline(&text),
                });
            }
            LineKind::ThematicBreak => {
                self.flush_list();
                self.emit(Block::HorizontalRule);
            }
            LineKind::BlockQuote { text } => {
                self.flush_list();
                self.emit(Block::Blockquote {
                    content: parse_inline(&text),
                });
            }
            LineKind::ListItem { ordered, text } => self.push_list_item(ordered, text),
            LineKind::Blank => self.flush_list(),
            LineKind::Paragraph { text } => {
                self.flush_list();
                self.emit(Block::Paragraph {
                    content: parse_inline(&text),
                });
            }
        }
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush
        self.flush_list();
        self.flush_unterminated_fence();
        self.out
    }

    fn emit(&mut self, block: Block) {
        log::trace!("emit {}", block.kind_name());
        self.out.push(block);
    }

    fn open_code_block(&mut self, sig: FenceSig) {
        self.mode = Mode::InCodeBlock {
            language: sig.language,
            buffer: String::new(),
        };
    }

    fn consume_code_line(&mut self, raw: &str) {
        if let Mode::InCodeBlock { buffer, .. } = &mut self.mode {
            buffer.push_str(raw);
            buffer.push('\n');
        }
    }

    fn close_code_block(&mut self) {
        let prev = std::mem::replace(&mut self.mode, Mode::Scanning);
        if let Mode::InCodeBlock {
            language,
            mut buffer,
            ..
        } = prev
        {
            if buffer.ends_with('\n') {
                buffer.pop();
            }
            self.emit(Block::CodeBlock {
                language,
                text: buffer,
            });
        }
    }

    fn flush_unterminated_fence(&mut self) {
        let buffered = matches!(
            &self.mode,
            Mode::InCodeBlock { buffer, .. } if !buffer.is_empty()
        );
        if buffered {
            log::debug!("closing unterminated code fence at end of input");
            self.close_code_block();
        } else {
            self.mode = Mode::Scanning;
        }
    }

    fn push_list_item(&mut self, ordered: bool, text: String) {
        if let Mode::InList {
            ordered: current,
            items,
        } = &mut self.mode
            && *current == ordered
        {
            items.push(text);
            return;
        }

        self.flush_list();
        self.mode = Mode::InList {
            ordered,
            items: vec![text],
        };
    }

    fn flush_list(&mut self) {
        let prev = std::mem::replace(&mut self.mode, Mode::Scanning);
        if let Mode::InList { ordered, items } = prev {
            log::trace!("flushing list run of {} items", items.len());
            self.emit(Block::List {
                ordered,
                items: items.iter().map(|item| parse_inline(item)).collect(),
            });
        } else {
            self.mode = prev; // put back a non-list mode (e.g. an open fence)
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
