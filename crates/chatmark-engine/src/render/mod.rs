//! # Rendering
//!
//! Reference consumers of a parsed [`Document`](crate::parsing::Document).
//! The parser never depends on these; they walk `Document::blocks` in order
//! and map each block and inline span to an output primitive.
//!
//! - **`html`**: escaped HTML fragments for web views
//! - **`plain`**: undecorated text for previews and clipboard copies

pub mod html;
pub mod plain;

pub use html::to_html;
pub use plain::to_plain_text;
