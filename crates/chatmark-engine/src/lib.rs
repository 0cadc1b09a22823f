pub mod io;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use io::*;
pub use parsing::{
    Document,
    blocks::Block,
    inline::{InlineSeq, InlineSpan},
    parse, parse_message,
};
pub use render::{to_html, to_plain_text};
