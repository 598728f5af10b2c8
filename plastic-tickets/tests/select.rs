use plasticdom::{Document, Element, NodeId};
use plastic_tickets::{TableError, get_selected_values, populate_with_options};

fn select_doc() -> (Document, NodeId) {
    let mut doc = Document::new();
    let root = doc.root();
    let select = doc
        .insert(root, Element::select().id("methods").multiple())
        .unwrap();
    (doc, select)
}

fn select_by_text(doc: &mut Document, select: NodeId, texts: &[&str]) {
    for option in doc.children(select).unwrap().to_vec() {
        let text = doc.text(option).unwrap().to_string();
        doc.set_selected(option, texts.contains(&text.as_str()))
            .unwrap();
    }
}

// ============================================================================
// Populating
// ============================================================================

#[test]
fn test_populate_preserves_order_and_duplicates() {
    let (mut doc, select) = select_doc();
    populate_with_options(&mut doc, select, ["FDM", "SLA", "FDM"]).unwrap();

    let options = doc.children(select).unwrap().to_vec();
    let texts: Vec<&str> = options.iter().map(|&o| doc.text(o).unwrap()).collect();
    assert_eq!(texts, vec!["FDM", "SLA", "FDM"]);
    for &o in &options {
        assert_eq!(doc.attr(o, "value").unwrap(), Some(doc.text(o).unwrap()));
        assert_eq!(doc.tag(o).unwrap(), "option");
    }
}

#[test]
fn test_populate_is_additive() {
    let (mut doc, select) = select_doc();
    doc.insert(select, Element::option("existing")).unwrap();
    populate_with_options(&mut doc, select, vec!["a".to_string(), "b".to_string()]).unwrap();
    assert_eq!(doc.children(select).unwrap().len(), 3);
}

#[test]
fn test_populate_stale_select() {
    let (mut doc, select) = select_doc();
    doc.remove(select).unwrap();
    assert!(matches!(
        populate_with_options(&mut doc, select, ["a"]),
        Err(TableError::Dom(_))
    ));
}

// ============================================================================
// Reading the selection
// ============================================================================

#[test]
fn test_selected_values_in_document_order() {
    let (mut doc, select) = select_doc();
    populate_with_options(&mut doc, select, ["x", "y", "z"]).unwrap();
    select_by_text(&mut doc, select, &["z", "x"]);

    assert_eq!(get_selected_values(&doc, Some(select)), vec!["x", "z"]);
}

#[test]
fn test_selected_value_falls_back_to_text() {
    let (mut doc, select) = select_doc();
    doc.insert(select, Element::new("option").text("no value").selected(true))
        .unwrap();
    doc.insert(
        select,
        Element::new("option").text("empty value").value("").selected(true),
    )
    .unwrap();
    doc.insert(
        select,
        Element::new("option").text("Shown").value("KEY").selected(true),
    )
    .unwrap();

    assert_eq!(
        get_selected_values(&doc, Some(select)),
        vec!["no value", "empty value", "KEY"]
    );
}

#[test]
fn test_selected_values_inside_optgroup() {
    let (mut doc, select) = select_doc();
    doc.insert(
        select,
        Element::new("optgroup")
            .child(Element::option("a").selected(true))
            .child(Element::option("b")),
    )
    .unwrap();
    doc.insert(select, Element::option("c").selected(true)).unwrap();

    assert_eq!(get_selected_values(&doc, Some(select)), vec!["a", "c"]);
}

#[test]
fn test_absent_or_empty_selection() {
    let (mut doc, select) = select_doc();
    assert!(get_selected_values(&doc, None).is_empty());
    assert!(get_selected_values(&doc, Some(select)).is_empty());

    populate_with_options(&mut doc, select, ["x"]).unwrap();
    assert!(get_selected_values(&doc, Some(select)).is_empty());

    doc.remove(select).unwrap();
    assert!(get_selected_values(&doc, Some(select)).is_empty());
}
