use std::collections::BTreeMap;

/// Detached description of an element subtree.
///
/// An `Element` becomes a live node only when it is inserted into a
/// [`Document`](crate::Document). Builders are plain values, so a subtree can
/// be assembled up front and materialized in one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    // Identity
    pub tag: String,
    pub id: Option<String>,

    // Content
    pub text: String,
    pub children: Vec<Element>,

    // Attributes (excluding `id`, which has its own field)
    pub attrs: BTreeMap<String, String>,

    // Form state
    /// Whether this element is a selected `<option>`.
    pub selected: bool,
}

impl Default for Element {
    fn default() -> Self {
        Self::new("div")
    }
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            text: String::new(),
            children: Vec::new(),
            attrs: BTreeMap::new(),
            selected: false,
        }
    }

    pub fn table() -> Self {
        Self::new("table")
    }

    pub fn thead() -> Self {
        Self::new("thead")
    }

    pub fn tbody() -> Self {
        Self::new("tbody")
    }

    pub fn tr() -> Self {
        Self::new("tr")
    }

    pub fn td(text: impl Into<String>) -> Self {
        Self::new("td").text(text)
    }

    pub fn th(text: impl Into<String>) -> Self {
        Self::new("th").text(text)
    }

    pub fn button() -> Self {
        Self::new("button")
    }

    pub fn select() -> Self {
        Self::new("select")
    }

    /// An `<option>` whose display text and value are both `name`.
    pub fn option(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::new("option").value(name.clone()).text(name)
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    // Content
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    // Attributes
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        if name == "id" {
            self.id = Some(value.into());
        } else {
            self.attrs.insert(name, value.into());
        }
        self
    }

    pub fn value(self, value: impl Into<String>) -> Self {
        self.attr("value", value)
    }

    /// Mark a `<select>` as accepting several selected options.
    pub fn multiple(self) -> Self {
        self.attr("multiple", "")
    }

    // Form state
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(new_children);
        self
    }
}
