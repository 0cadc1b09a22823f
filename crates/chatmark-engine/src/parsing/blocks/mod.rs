//! # Block Parsing
//!
//! Two-phase, line-oriented block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a `LineClass`
//!    containing local facts (its verbatim text and the first matching `LineKind`)
//!
//! 2. **Block Construction** (`builder`): A `BlockBuilder` state machine
//!    (`Scanning | InCodeBlock | InList`) consumes line classes and emits `Block`s
//!    as runs open and close
//!
//! ## Modules
//!
//! - **`types`**: The `Block` enum
//! - **`kinds`**: Block-specific types owning their marker syntax
//!   (CodeFence, Heading, ThematicBreak, BlockQuote, ListItem)
//! - **`classify`**: `LineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Classification precedence is fixed: fence > heading > rule > quote > list > blank > paragraph
//! - Fenced code blocks are raw zones: no block/inline parsing inside
//! - A list run is emitted only once it ends, and is never empty

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineClassifier, LineKind};
pub use types::Block;
