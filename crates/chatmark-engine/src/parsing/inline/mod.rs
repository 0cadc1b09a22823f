//! # Inline Parsing
//!
//! Extract-then-reassemble inline parsing.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing and is applied to the text
//! of each heading, paragraph, quote and list item once its block is final.
//! It has no block-level state: text in, span list out.
//!
//! Each inline pattern runs as its own pass. Matches are moved into a side
//! table and replaced by opaque placeholder tokens, which later passes cannot
//! match across or inside. A final pass splits the text on its tokens.
//!
//! ## Modules
//!
//! - **`types`**: `InlineSpan` enum (Text, Bold, Italic, Code, Link)
//! - **`kinds`**: Inline-specific types with owned delimiters (CodeSpan, Link, Emphasis)
//! - **`cursor`**: `Cursor` for byte-wise delimiter scanning
//! - **`placeholder`**: `SideTable` and the token format
//! - **`parser`**: `parse_inline()` main entry point with `try_parse_*` helpers
//!
//! ## Pass Order
//!
//! Code spans, links, bold (`**`, `__`), italic (`*`, `_`).
//! `` `*not italic*` `` parses as a single code span.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod placeholder;
pub mod types;

pub use parser::parse_inline;
pub use types::{InlineSeq, InlineSpan};
