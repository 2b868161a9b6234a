use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::types::Style;

/// Handle to a node inside a [`Document`](super::Document).
///
/// Handles are indices into the document arena and stay valid for the
/// lifetime of the document: nodes are never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// The document body.
    Root,
    Table,
    Head,
    Body,
    Row,
    HeaderCell,
    Cell,
    Block,
    Button,
}

impl Tag {
    pub fn is_cell(self) -> bool {
        matches!(self, Tag::Cell | Tag::HeaderCell)
    }
}

#[derive(Debug, Clone)]
pub struct Node {
    pub tag: Tag,
    /// DOM `id` attribute.
    pub id: Option<String>,
    pub classes: BTreeSet<String>,
    pub attrs: BTreeMap<String, String>,
    pub text: Option<String>,
    pub style: Style,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    pub(crate) fn new(tag: Tag) -> Self {
        Self {
            tag,
            id: None,
            classes: BTreeSet::new(),
            attrs: BTreeMap::new(),
            text: None,
            style: Style::default(),
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}
