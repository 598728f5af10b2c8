use crate::document::NodeId;

/// Tracks which node currently holds input focus.
#[derive(Debug, Default, Clone)]
pub struct FocusState {
    focused: Option<NodeId>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused node.
    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    /// Focus a node.
    /// Returns true if focus changed.
    pub fn focus(&mut self, id: NodeId) -> bool {
        if self.focused == Some(id) {
            return false;
        }
        log::trace!("[focus] Changing focus from {:?} to {}", self.focused, id);
        self.focused = Some(id);
        true
    }

    /// Clear focus.
    /// Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        if let Some(old) = self.focused.take() {
            log::trace!("[focus] Blurred {}", old);
            true
        } else {
            false
        }
    }

    /// Clear focus only if `id` is the focused node, like `element.blur()`.
    pub fn blur_node(&mut self, id: NodeId) -> bool {
        if self.focused == Some(id) {
            self.blur()
        } else {
            false
        }
    }
}
