use crate::document::{Document, NodeId};

/// Events that can be dispatched into a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Pointer click on a node. Runs its click handler, if any.
    Click { target: NodeId },
    /// Node gained focus
    Focus { target: NodeId },
    /// Node lost focus
    Blur { target: NodeId },
}

impl Event {
    pub fn target(&self) -> NodeId {
        match *self {
            Event::Click { target } | Event::Focus { target } | Event::Blur { target } => target,
        }
    }
}

/// Click handler attached to a node.
///
/// Handlers receive the document mutably, so they can rebuild parts of the
/// tree in response to the click, along with the id of the clicked node.
pub type ClickHandler = Box<dyn FnMut(&mut Document, NodeId)>;
