//! Helpers for `<select>` controls.

use plasticdom::{Document, DomError, NodeId};

use crate::error::TableError;

/// Append one `<option>` per name to `select`, in order.
///
/// Each option's display text and value are both the name. Existing options
/// are kept and duplicates are not filtered.
pub fn populate_with_options<I, S>(
    doc: &mut Document,
    select: NodeId,
    names: I,
) -> Result<(), TableError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if !doc.contains(select) {
        return Err(DomError::NodeNotFound(select).into());
    }
    for name in names {
        let name = name.as_ref();
        doc.add_option(select, name, name)?;
    }
    Ok(())
}

/// Values of the selected options of `select`, in document order.
///
/// An option contributes its `value` attribute when non-empty, otherwise its
/// text. A missing or stale control yields an empty list.
pub fn get_selected_values(doc: &Document, select: Option<NodeId>) -> Vec<String> {
    let Some(select) = select else {
        return Vec::new();
    };
    let Ok(descendants) = doc.descendants(select) else {
        return Vec::new();
    };

    descendants
        .into_iter()
        .filter(|&n| doc.tag(n).is_ok_and(|tag| tag == "option"))
        .filter(|&n| doc.is_selected(n).unwrap_or(false))
        .map(|n| match doc.attr(n, "value") {
            Ok(Some(value)) if !value.is_empty() => value.to_string(),
            _ => doc.text_content(n).unwrap_or_default(),
        })
        .collect()
}
