use tabledom::{Document, DomError, Element, Tag};

#[test]
fn test_append_builds_subtree_in_order() {
    let mut doc = Document::new();
    let row = doc.append(
        doc.root(),
        Element::row()
            .child(Element::cell("a").id("a"))
            .child(Element::cell("b").id("b")),
    );

    let children = doc.children(row);
    assert_eq!(children.len(), 2);
    assert_eq!(doc.node(children[0]).id.as_deref(), Some("a"));
    assert_eq!(doc.parent(children[1]), Some(row));
    assert_eq!(doc.node(row).tag, Tag::Row);
}

#[test]
fn test_insert_before_places_sibling() {
    let mut doc = Document::new();
    let cell = doc.append(doc.root(), Element::cell("x"));
    let panel = doc.append(cell, Element::block().class("panel"));
    let link = doc.insert_before(panel, Element::button("Open")).unwrap();

    assert_eq!(doc.children(cell), &[link, panel]);
    assert_eq!(doc.previous_sibling(panel), Some(link));
    assert_eq!(doc.previous_sibling(link), None);
}

#[test]
fn test_insert_before_root_fails() {
    let mut doc = Document::new();
    let root = doc.root();
    assert_eq!(
        doc.insert_before(root, Element::block()),
        Err(DomError::Detached(root))
    );
}

#[test]
fn test_template_clones_are_independent() {
    let mut doc = Document::new();
    let template = Element::button("Open").class("link");
    let a = doc.append(doc.root(), template.clone());
    let b = doc.append(doc.root(), template);

    doc.add_class(a, "active");
    assert!(doc.has_class(a, "active"));
    assert!(!doc.has_class(b, "active"));
}

#[test]
fn test_find_by_class_is_document_order() {
    let mut doc = Document::new();
    doc.append(
        doc.root(),
        Element::table()
            .child(Element::row().child(Element::cell("1").id("one").class("h")))
            .child(
                Element::row()
                    .child(Element::cell("2"))
                    .child(Element::cell("3").id("three").class("h")),
            ),
    );

    let found: Vec<_> = doc
        .find_by_class(doc.root(), "h")
        .into_iter()
        .map(|n| doc.node(n).id.clone().unwrap())
        .collect();
    assert_eq!(found, vec!["one", "three"]);
}

#[test]
fn test_ancestors_and_focus_within() {
    let mut doc = Document::new();
    let cell = doc.append(doc.root(), Element::cell("x"));
    let panel = doc.append(cell, Element::block());
    let close = doc.append(panel, Element::button("Close"));

    let chain: Vec<_> = doc.ancestors(close).collect();
    assert_eq!(chain, vec![close, panel, cell, doc.root()]);

    assert!(!doc.focus_within(panel));
    assert!(doc.focus(close));
    assert!(!doc.focus(close));
    assert!(doc.focus_within(panel));
    assert!(doc.focus_within(cell));

    doc.focus(cell);
    assert!(!doc.focus_within(panel));
    assert!(doc.blur());
    assert_eq!(doc.focused(), None);
}

#[test]
fn test_attributes_round_trip() {
    let mut doc = Document::new();
    let cell = doc.append(doc.root(), Element::cell("x").attr("tabindex", "0"));
    assert_eq!(doc.attr(cell, "tabindex"), Some("0"));
    doc.set_attr(cell, "aria-expanded", "false");
    assert_eq!(doc.remove_attr(cell, "aria-expanded").as_deref(), Some("false"));
    assert_eq!(doc.attr(cell, "aria-expanded"), None);
}
