//! Arena-backed document tree.
//!
//! Nodes live in a slot vector and are addressed by [`NodeId`]. Slots are
//! never reused, so a node created to replace another always has a distinct
//! identity, and ids of removed nodes stay stale forever instead of aliasing
//! a newer node.

use std::collections::BTreeMap;
use std::fmt;

use crate::element::Element;
use crate::error::DomError;
use crate::event::{ClickHandler, Event};
use crate::focus::FocusState;

/// Opaque identity of a node in a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

struct Node {
    tag: String,
    text: String,
    attrs: BTreeMap<String, String>,
    selected: bool,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    onclick: Option<ClickHandler>,
}

impl Node {
    fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            text: String::new(),
            attrs: BTreeMap::new(),
            selected: false,
            parent: None,
            children: Vec::new(),
            onclick: None,
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("tag", &self.tag)
            .field("text", &self.text)
            .field("attrs", &self.attrs)
            .field("selected", &self.selected)
            .field("parent", &self.parent)
            .field("children", &self.children)
            .field("onclick", &self.onclick.is_some())
            .finish()
    }
}

/// An in-memory HTML-like document.
#[derive(Debug)]
pub struct Document {
    nodes: Vec<Option<Node>>,
    root: NodeId,
    focus: FocusState,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty document whose root is a `<body>` element.
    pub fn new() -> Self {
        Self {
            nodes: vec![Some(Node::new("body"))],
            root: NodeId(0),
            focus: FocusState::new(),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Whether `id` refers to a live node (attached or detached).
    pub fn contains(&self, id: NodeId) -> bool {
        matches!(self.nodes.get(id.0), Some(Some(_)))
    }

    fn node(&self, id: NodeId) -> Result<&Node, DomError> {
        self.nodes
            .get(id.0)
            .and_then(Option::as_ref)
            .ok_or(DomError::NodeNotFound(id))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, DomError> {
        self.nodes
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .ok_or(DomError::NodeNotFound(id))
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Some(node));
        id
    }

    // -------------------------------------------------------------------------
    // Construction
    // -------------------------------------------------------------------------

    /// Create a detached element, like `document.createElement(tag)`.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.alloc(Node::new(tag))
    }

    /// Materialize a detached copy of `element` and its subtree.
    pub fn build(&mut self, element: Element) -> NodeId {
        let Element {
            tag,
            id,
            text,
            children,
            mut attrs,
            selected,
        } = element;

        if let Some(id) = id {
            attrs.insert("id".to_string(), id);
        }

        let node = self.alloc(Node {
            text,
            attrs,
            selected,
            ..Node::new(tag)
        });

        let child_ids: Vec<NodeId> = children.into_iter().map(|c| self.build(c)).collect();
        for &child in &child_ids {
            if let Some(Some(slot)) = self.nodes.get_mut(child.0) {
                slot.parent = Some(node);
            }
        }
        if let Some(Some(slot)) = self.nodes.get_mut(node.0) {
            slot.children = child_ids;
        }

        node
    }

    /// Materialize `element` and append it under `parent`.
    pub fn insert(&mut self, parent: NodeId, element: Element) -> Result<NodeId, DomError> {
        self.node(parent)?;
        let id = self.build(element);
        self.append_child(parent, id)?;
        Ok(id)
    }

    // -------------------------------------------------------------------------
    // Tree structure
    // -------------------------------------------------------------------------

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).ok().and_then(|n| n.parent)
    }

    pub fn children(&self, id: NodeId) -> Result<&[NodeId], DomError> {
        Ok(&self.node(id)?.children)
    }

    /// Index of `id` among its parent's children.
    pub fn position(&self, id: NodeId) -> Option<usize> {
        let parent = self.parent(id)?;
        self.node(parent).ok()?.children.iter().position(|&c| c == id)
    }

    /// All descendants of `id` in document order, excluding `id` itself.
    pub fn descendants(&self, id: NodeId) -> Result<Vec<NodeId>, DomError> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.node(id)?.children.iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            if let Ok(node) = self.node(next) {
                stack.extend(node.children.iter().rev().copied());
            }
        }
        Ok(out)
    }

    fn is_ancestor_or_self(&self, ancestor: NodeId, mut id: NodeId) -> bool {
        loop {
            if id == ancestor {
                return true;
            }
            match self.parent(id) {
                Some(parent) => id = parent,
                None => return false,
            }
        }
    }

    fn detach(&mut self, id: NodeId) -> Result<(), DomError> {
        if let Some(parent) = self.node_mut(id)?.parent.take() {
            self.node_mut(parent)?.children.retain(|&c| c != id);
        }
        Ok(())
    }

    /// Append `child` as the last child of `parent`, moving it if it is
    /// already attached elsewhere.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        self.node(parent)?;
        self.node(child)?;
        if self.is_ancestor_or_self(child, parent) {
            return Err(DomError::WouldCycle { parent, child });
        }

        self.detach(child)?;
        self.node_mut(parent)?.children.push(child);
        self.node_mut(child)?.parent = Some(parent);
        Ok(())
    }

    /// Replace `old` with `new` under the same parent at the same position,
    /// like `parent.replaceChild(new, old)`. The old subtree is dropped.
    pub fn replace_child(&mut self, new: NodeId, old: NodeId) -> Result<(), DomError> {
        self.node(new)?;
        let parent = self.node(old)?.parent.ok_or(DomError::NoParent(old))?;
        if new == old {
            return Ok(());
        }
        if self.is_ancestor_or_self(new, parent) {
            return Err(DomError::WouldCycle { parent, child: new });
        }

        self.detach(new)?;
        let index = self
            .position(old)
            .ok_or(DomError::NotAChild { parent, child: old })?;
        self.node_mut(parent)?.children[index] = new;
        self.node_mut(new)?.parent = Some(parent);
        self.node_mut(old)?.parent = None;
        self.drop_subtree(old);

        log::trace!("[dom] Replaced {} with {} under {}", old, new, parent);
        Ok(())
    }

    /// Detach `child` from `parent` and drop its subtree.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        if self.node(child)?.parent != Some(parent) {
            return Err(DomError::NotAChild { parent, child });
        }
        self.detach(child)?;
        self.drop_subtree(child);
        Ok(())
    }

    /// Detach `id` from its parent and drop its subtree.
    pub fn remove(&mut self, id: NodeId) -> Result<(), DomError> {
        let parent = self.node(id)?.parent.ok_or(DomError::NoParent(id))?;
        self.remove_child(parent, id)
    }

    fn drop_subtree(&mut self, id: NodeId) {
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            if let Some(node) = self.nodes.get_mut(next.0).and_then(Option::take) {
                stack.extend(node.children);
                self.focus.blur_node(next);
            }
        }
    }

    /// First attached element with the given `id` attribute, in document order.
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        let has_id = |n: NodeId| {
            self.node(n)
                .is_ok_and(|node| node.attrs.get("id").is_some_and(|v| v == id))
        };

        if has_id(self.root) {
            return Some(self.root);
        }
        self.descendants(self.root)
            .ok()?
            .into_iter()
            .find(|&n| has_id(n))
    }

    // -------------------------------------------------------------------------
    // Node data
    // -------------------------------------------------------------------------

    pub fn tag(&self, id: NodeId) -> Result<&str, DomError> {
        Ok(&self.node(id)?.tag)
    }

    /// The node's own text, not including descendants.
    pub fn text(&self, id: NodeId) -> Result<&str, DomError> {
        Ok(&self.node(id)?.text)
    }

    /// Replace the node's content with `text`, dropping any children.
    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) -> Result<(), DomError> {
        let node = self.node_mut(id)?;
        node.text = text.into();
        let children = std::mem::take(&mut node.children);
        for child in children {
            if let Ok(c) = self.node_mut(child) {
                c.parent = None;
            }
            self.drop_subtree(child);
        }
        Ok(())
    }

    /// Text of the node and all its descendants, concatenated in document order.
    pub fn text_content(&self, id: NodeId) -> Result<String, DomError> {
        let mut out = self.node(id)?.text.clone();
        for child in self.descendants(id)? {
            out.push_str(&self.node(child)?.text);
        }
        Ok(out)
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Result<Option<&str>, DomError> {
        Ok(self.node(id)?.attrs.get(name).map(String::as_str))
    }

    pub fn attrs(&self, id: NodeId) -> Result<&BTreeMap<String, String>, DomError> {
        Ok(&self.node(id)?.attrs)
    }

    pub fn set_attr(
        &mut self,
        id: NodeId,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), DomError> {
        self.node_mut(id)?.attrs.insert(name.into(), value.into());
        Ok(())
    }

    pub fn is_selected(&self, id: NodeId) -> Result<bool, DomError> {
        Ok(self.node(id)?.selected)
    }

    pub fn set_selected(&mut self, id: NodeId, selected: bool) -> Result<(), DomError> {
        self.node_mut(id)?.selected = selected;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Table and form helpers
    // -------------------------------------------------------------------------

    /// Append a new `<tr>` to a table section, like `insertRow()`.
    pub fn insert_row(&mut self, section: NodeId) -> Result<NodeId, DomError> {
        self.insert(section, Element::tr())
    }

    /// Append a new `<td>` to a row, like `insertCell()`.
    pub fn insert_cell(&mut self, row: NodeId) -> Result<NodeId, DomError> {
        self.insert(row, Element::new("td"))
    }

    /// Append an `<option>` to a select control, like `select.add(option)`.
    pub fn add_option(
        &mut self,
        select: NodeId,
        text: &str,
        value: &str,
    ) -> Result<NodeId, DomError> {
        self.insert(select, Element::new("option").text(text).value(value))
    }

    // -------------------------------------------------------------------------
    // Events and focus
    // -------------------------------------------------------------------------

    /// Attach a click handler, replacing any previous one.
    pub fn set_onclick<F>(&mut self, id: NodeId, handler: F) -> Result<(), DomError>
    where
        F: FnMut(&mut Document, NodeId) + 'static,
    {
        self.node_mut(id)?.onclick = Some(Box::new(handler));
        Ok(())
    }

    pub fn has_onclick(&self, id: NodeId) -> bool {
        self.node(id).is_ok_and(|n| n.onclick.is_some())
    }

    /// Dispatch an event to its target.
    ///
    /// A click focuses the target and then runs its handler. The handler is
    /// detached while it runs and put back afterwards, unless it installed a
    /// replacement or the node no longer exists.
    pub fn dispatch(&mut self, event: Event) -> Result<(), DomError> {
        let target = event.target();
        self.node(target)?;
        log::trace!("[dom] Dispatching {:?}", event);

        match event {
            Event::Click { target } => {
                self.focus.focus(target);
                let Some(mut handler) = self.node_mut(target)?.onclick.take() else {
                    return Ok(());
                };
                handler(self, target);
                if let Ok(node) = self.node_mut(target) {
                    if node.onclick.is_none() {
                        node.onclick = Some(handler);
                    }
                }
            }
            Event::Focus { target } => {
                self.focus.focus(target);
            }
            Event::Blur { target } => {
                self.focus.blur_node(target);
            }
        }
        Ok(())
    }

    /// Shorthand for dispatching [`Event::Click`].
    pub fn click(&mut self, id: NodeId) -> Result<(), DomError> {
        self.dispatch(Event::Click { target: id })
    }

    pub fn focused(&self) -> Option<NodeId> {
        self.focus.focused()
    }

    pub fn focus(&mut self, id: NodeId) -> Result<bool, DomError> {
        self.node(id)?;
        Ok(self.focus.focus(id))
    }

    /// Remove focus from `id` if it holds it, like `element.blur()`.
    pub fn blur(&mut self, id: NodeId) -> bool {
        self.focus.blur_node(id)
    }
}
