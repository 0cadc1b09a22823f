pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list_item;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceSig};
pub use heading::Heading;
pub use list_item::{ListItem, ListMarker};
pub use thematic_break::ThematicBreak;
