use std::cell::Cell;
use std::rc::Rc;

use plasticdom::{Document, DomError, Element, Event};

fn button_doc() -> (Document, plasticdom::NodeId) {
    let mut doc = Document::new();
    let root = doc.root();
    let button = doc.insert(root, Element::button().id("btn")).unwrap();
    (doc, button)
}

// ============================================================================
// Click dispatch
// ============================================================================

#[test]
fn test_click_runs_handler_each_time() {
    let (mut doc, button) = button_doc();
    let clicks = Rc::new(Cell::new(0));

    let counter = clicks.clone();
    doc.set_onclick(button, move |_, _| counter.set(counter.get() + 1))
        .unwrap();

    doc.click(button).unwrap();
    doc.click(button).unwrap();
    assert_eq!(clicks.get(), 2);
    assert!(doc.has_onclick(button));
}

#[test]
fn test_click_without_handler_only_focuses() {
    let (mut doc, button) = button_doc();
    doc.click(button).unwrap();
    assert_eq!(doc.focused(), Some(button));
}

#[test]
fn test_click_on_stale_node_fails() {
    let (mut doc, button) = button_doc();
    doc.remove(button).unwrap();
    assert_eq!(doc.click(button), Err(DomError::NodeNotFound(button)));
}

#[test]
fn test_handler_can_mutate_document() {
    let (mut doc, button) = button_doc();
    doc.set_onclick(button, |doc, target| {
        doc.set_text(target, "clicked").unwrap();
        doc.blur(target);
    })
    .unwrap();

    doc.click(button).unwrap();
    assert_eq!(doc.text(button).unwrap(), "clicked");
    assert_eq!(doc.focused(), None);
}

#[test]
fn test_handler_replacement_is_kept() {
    let (mut doc, button) = button_doc();
    let second = Rc::new(Cell::new(false));

    let flag = second.clone();
    doc.set_onclick(button, move |doc, target| {
        let flag = flag.clone();
        doc.set_onclick(target, move |_, _| flag.set(true)).unwrap();
    })
    .unwrap();

    doc.click(button).unwrap();
    assert!(!second.get());
    doc.click(button).unwrap();
    assert!(second.get());
}

#[test]
fn test_handler_removing_its_node() {
    let (mut doc, button) = button_doc();
    doc.set_onclick(button, |doc, target| doc.remove(target).unwrap())
        .unwrap();

    doc.click(button).unwrap();
    assert!(!doc.contains(button));
    assert_eq!(doc.focused(), None);
}

// ============================================================================
// Focus
// ============================================================================

#[test]
fn test_focus_and_blur_events() {
    let (mut doc, button) = button_doc();
    let root = doc.root();
    let other = doc.insert(root, Element::button()).unwrap();

    doc.dispatch(Event::Focus { target: button }).unwrap();
    assert_eq!(doc.focused(), Some(button));

    // Blurring a node that is not focused leaves focus alone
    doc.dispatch(Event::Blur { target: other }).unwrap();
    assert_eq!(doc.focused(), Some(button));

    doc.dispatch(Event::Blur { target: button }).unwrap();
    assert_eq!(doc.focused(), None);
}

#[test]
fn test_event_target() {
    let (_, button) = button_doc();
    assert_eq!(Event::Click { target: button }.target(), button);
}
