//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts a `Document` to a stable outline (`Snap`) whose
//!   `Display` form is what `insta` snapshots record
//! - **`invariants`**: Runtime checks for parser output (non-empty lists,
//!   heading levels, canonical text spans, no leaked placeholder tokens)
//!
//! ## Testing Strategy
//!
//! Parsing behavior is pinned by snapshots of the
//! outline rather than by a separate formal grammar.

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, SnapNode, normalize};
