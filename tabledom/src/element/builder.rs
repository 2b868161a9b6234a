use std::collections::{BTreeMap, BTreeSet};

use super::Tag;
use crate::types::{Display, Edges, Position, Style};

/// Detached node description, inserted into a document with
/// [`Document::append`](super::Document::append) or
/// [`Document::insert_before`](super::Document::insert_before).
///
/// Elements are plain values: cloning one and inserting it several times
/// produces independent subtrees, which is how shared templates are stamped.
#[derive(Debug, Clone)]
pub struct Element {
    pub tag: Tag,
    pub id: Option<String>,
    pub classes: BTreeSet<String>,
    pub attrs: BTreeMap<String, String>,
    pub text: Option<String>,
    pub style: Style,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            id: None,
            classes: BTreeSet::new(),
            attrs: BTreeMap::new(),
            text: None,
            style: Style::default(),
            children: Vec::new(),
        }
    }

    pub fn table() -> Self {
        Self::new(Tag::Table)
    }

    pub fn head() -> Self {
        Self::new(Tag::Head)
    }

    pub fn body() -> Self {
        Self::new(Tag::Body)
    }

    pub fn row() -> Self {
        Self::new(Tag::Row)
    }

    pub fn header_cell(text: impl Into<String>) -> Self {
        Self::new(Tag::HeaderCell).text(text)
    }

    pub fn cell(text: impl Into<String>) -> Self {
        Self::new(Tag::Cell).text(text)
    }

    pub fn block() -> Self {
        Self::new(Tag::Block)
    }

    pub fn button(text: impl Into<String>) -> Self {
        Self::new(Tag::Button).text(text)
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.insert(class.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    // Style
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn width(mut self, width: u16) -> Self {
        self.style.width = Some(width);
        self
    }

    pub fn height(mut self, height: u16) -> Self {
        self.style.height = Some(height);
        self
    }

    pub fn border(mut self, border: Edges) -> Self {
        self.style.border = border;
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.style.padding = padding;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.style.display = Display::None;
        self
    }

    pub fn absolute(mut self) -> Self {
        self.style.position = Position::Absolute;
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }
}
