use crate::document::{Document, NodeId};
use crate::error::DomError;

/// Serialize `id` and its subtree as HTML.
///
/// Attributes are written in name order, except `id` which always comes
/// first. A selected option gets a bare `selected` attribute.
pub fn to_html(doc: &Document, id: NodeId) -> Result<String, DomError> {
    let mut out = String::new();
    write_node(doc, id, &mut out)?;
    Ok(out)
}

fn write_node(doc: &Document, id: NodeId, out: &mut String) -> Result<(), DomError> {
    let tag = doc.tag(id)?;
    let attrs = doc.attrs(id)?;

    out.push('<');
    out.push_str(tag);
    if let Some(value) = attrs.get("id") {
        write_attr(out, "id", value);
    }
    for (name, value) in attrs.iter().filter(|(name, _)| name.as_str() != "id") {
        write_attr(out, name, value);
    }
    if doc.is_selected(id)? {
        out.push_str(" selected");
    }
    out.push('>');

    escape_into(out, doc.text(id)?, false);
    for &child in doc.children(id)? {
        write_node(doc, child, out)?;
    }

    out.push_str("</");
    out.push_str(tag);
    out.push('>');
    Ok(())
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    if !value.is_empty() {
        out.push_str("=\"");
        escape_into(out, value, true);
        out.push('"');
    }
}

fn escape_into(out: &mut String, s: &str, in_attr: bool) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if in_attr => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
