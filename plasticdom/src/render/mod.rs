//! Serialization of document subtrees.

mod html;
mod text;

pub use html::to_html;
pub use text::to_text;
