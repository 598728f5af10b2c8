use plasticdom::{Document, DomError, Element};

fn table_doc() -> (Document, plasticdom::NodeId) {
    let mut doc = Document::new();
    let root = doc.root();
    let table = doc
        .insert(
            root,
            Element::table()
                .id("stock")
                .child(Element::thead().id("head"))
                .child(Element::tbody().id("body"))
                .child(Element::new("tfoot").id("foot")),
        )
        .unwrap();
    (doc, table)
}

// ============================================================================
// Construction and lookup
// ============================================================================

#[test]
fn test_insert_materializes_subtree() {
    let (doc, table) = table_doc();

    assert_eq!(doc.tag(table).unwrap(), "table");
    assert_eq!(doc.children(table).unwrap().len(), 3);
    assert_eq!(doc.parent(table), Some(doc.root()));
    assert_eq!(doc.attr(table, "id").unwrap(), Some("stock"));
}

#[test]
fn test_get_element_by_id_document_order() {
    let (mut doc, table) = table_doc();
    let body = doc.get_element_by_id("body").unwrap();
    assert_eq!(doc.tag(body).unwrap(), "tbody");

    // A later duplicate id does not shadow the first one
    doc.insert(table, Element::new("tbody").id("body")).unwrap();
    assert_eq!(doc.get_element_by_id("body"), Some(body));
    assert_eq!(doc.get_element_by_id("missing"), None);
}

#[test]
fn test_detached_nodes_are_not_found_by_id() {
    let mut doc = Document::new();
    let orphan = doc.create_element("tbody");
    doc.set_attr(orphan, "id", "orphan").unwrap();
    assert_eq!(doc.get_element_by_id("orphan"), None);
    assert!(doc.contains(orphan));
}

#[test]
fn test_descendants_in_document_order() {
    let mut doc = Document::new();
    let root = doc.root();
    let list = doc
        .insert(
            root,
            Element::new("ul")
                .child(Element::new("li").text("a").child(Element::new("b").text("a1")))
                .child(Element::new("li").text("b")),
        )
        .unwrap();

    let texts: Vec<String> = doc
        .descendants(list)
        .unwrap()
        .into_iter()
        .map(|n| doc.text(n).unwrap().to_string())
        .collect();
    assert_eq!(texts, vec!["a", "a1", "b"]);
    assert_eq!(doc.text_content(list).unwrap(), "aa1b");
}

// ============================================================================
// Mutation
// ============================================================================

#[test]
fn test_replace_child_keeps_position() {
    let (mut doc, table) = table_doc();
    let old = doc.get_element_by_id("body").unwrap();
    let new = doc.create_element("tbody");
    doc.set_attr(new, "id", "body").unwrap();

    doc.replace_child(new, old).unwrap();

    assert_ne!(old, new);
    assert!(!doc.contains(old));
    assert_eq!(doc.parent(new), Some(table));
    assert_eq!(doc.position(new), Some(1));
    assert_eq!(doc.get_element_by_id("body"), Some(new));
}

#[test]
fn test_replace_child_requires_parent() {
    let mut doc = Document::new();
    let a = doc.create_element("tbody");
    let b = doc.create_element("tbody");
    assert_eq!(doc.replace_child(a, b), Err(DomError::NoParent(b)));
}

#[test]
fn test_replace_child_drops_old_subtree() {
    let (mut doc, _) = table_doc();
    let old = doc.get_element_by_id("body").unwrap();
    let row = doc.insert_row(old).unwrap();
    let cell = doc.insert_cell(row).unwrap();

    let new = doc.create_element("tbody");
    doc.replace_child(new, old).unwrap();

    assert!(!doc.contains(row));
    assert!(!doc.contains(cell));
    assert_eq!(doc.tag(cell), Err(DomError::NodeNotFound(cell)));
}

#[test]
fn test_append_child_rejects_cycles() {
    let (mut doc, table) = table_doc();
    let body = doc.get_element_by_id("body").unwrap();
    assert_eq!(
        doc.append_child(body, table),
        Err(DomError::WouldCycle {
            parent: body,
            child: table
        })
    );
    assert_eq!(
        doc.append_child(table, table),
        Err(DomError::WouldCycle {
            parent: table,
            child: table
        })
    );
}

#[test]
fn test_append_child_moves_node() {
    let (mut doc, table) = table_doc();
    let head = doc.get_element_by_id("head").unwrap();
    let foot = doc.get_element_by_id("foot").unwrap();

    doc.append_child(table, head).unwrap();
    assert_eq!(doc.position(head), Some(2));
    assert_eq!(doc.position(foot), Some(1));
}

#[test]
fn test_remove_child_checks_parent() {
    let (mut doc, table) = table_doc();
    let root = doc.root();
    let body = doc.get_element_by_id("body").unwrap();

    assert_eq!(
        doc.remove_child(root, body),
        Err(DomError::NotAChild {
            parent: root,
            child: body
        })
    );
    doc.remove_child(table, body).unwrap();
    assert!(!doc.contains(body));
    assert_eq!(doc.remove(root), Err(DomError::NoParent(root)));
}

#[test]
fn test_set_text_replaces_children() {
    let mut doc = Document::new();
    let root = doc.root();
    let th = doc
        .insert(root, Element::th("Name").child(Element::button().text("x")))
        .unwrap();
    let button = doc.children(th).unwrap()[0];

    doc.set_text(th, "Label").unwrap();
    assert_eq!(doc.text(th).unwrap(), "Label");
    assert!(doc.children(th).unwrap().is_empty());
    assert!(!doc.contains(button));
}

#[test]
fn test_add_option_and_selection() {
    let mut doc = Document::new();
    let root = doc.root();
    let select = doc.insert(root, Element::select().multiple()).unwrap();
    let opt = doc.add_option(select, "Resin", "RESIN").unwrap();

    assert_eq!(doc.text(opt).unwrap(), "Resin");
    assert_eq!(doc.attr(opt, "value").unwrap(), Some("RESIN"));
    assert!(!doc.is_selected(opt).unwrap());
    doc.set_selected(opt, true).unwrap();
    assert!(doc.is_selected(opt).unwrap());
}
