pub mod document;
pub mod element;
pub mod error;
pub mod event;
pub mod focus;
pub mod render;

pub use document::{Document, NodeId};
pub use element::Element;
pub use error::DomError;
pub use event::{ClickHandler, Event};
pub use focus::FocusState;
pub use render::{to_html, to_text};
