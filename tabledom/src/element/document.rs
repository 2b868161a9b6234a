use super::{Element, Node, NodeId, Tag};
use crate::error::DomError;
use crate::types::Style;

/// Arena-backed node tree plus the focus pointer.
///
/// Nodes are only ever added; a [`NodeId`] handed out by a document stays
/// valid for the document's lifetime.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    focused: Option<NodeId>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(Tag::Root)],
            focused: None,
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn style(&self, id: NodeId) -> &Style {
        &self.nodes[id.0].style
    }

    pub fn style_mut(&mut self, id: NodeId) -> &mut Style {
        &mut self.nodes[id.0].style
    }

    // =========================================================================
    // Tree mutation
    // =========================================================================

    /// Append `element` (and its subtree) as the last child of `parent`.
    pub fn append(&mut self, parent: NodeId, element: Element) -> NodeId {
        let id = self.materialize(element, parent);
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Insert `element` as the sibling immediately before `reference`.
    pub fn insert_before(&mut self, reference: NodeId, element: Element) -> Result<NodeId, DomError> {
        let parent = self.nodes[reference.0]
            .parent
            .ok_or(DomError::Detached(reference))?;
        let id = self.materialize(element, parent);
        let siblings = &mut self.nodes[parent.0].children;
        let pos = siblings
            .iter()
            .position(|&c| c == reference)
            .ok_or(DomError::Detached(reference))?;
        siblings.insert(pos, id);
        Ok(id)
    }

    fn materialize(&mut self, element: Element, parent: NodeId) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            tag: element.tag,
            id: element.id,
            classes: element.classes,
            attrs: element.attrs,
            text: element.text,
            style: element.style,
            parent: Some(parent),
            children: Vec::new(),
        });
        for child in element.children {
            let child_id = self.materialize(child, id);
            self.nodes[id.0].children.push(child_id);
        }
        id
    }

    // =========================================================================
    // Attributes and classes
    // =========================================================================

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.nodes[id.0].attr(name)
    }

    pub fn set_attr(&mut self, id: NodeId, name: impl Into<String>, value: impl Into<String>) {
        self.nodes[id.0].attrs.insert(name.into(), value.into());
    }

    pub fn remove_attr(&mut self, id: NodeId, name: &str) -> Option<String> {
        self.nodes[id.0].attrs.remove(name)
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.nodes[id.0].has_class(class)
    }

    pub fn add_class(&mut self, id: NodeId, class: impl Into<String>) {
        self.nodes[id.0].classes.insert(class.into());
    }

    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        self.nodes[id.0].classes.remove(class);
    }

    pub fn set_dom_id(&mut self, id: NodeId, dom_id: impl Into<String>) {
        self.nodes[id.0].id = Some(dom_id.into());
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    pub fn previous_sibling(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.parent(id)?;
        let siblings = self.children(parent);
        let pos = siblings.iter().position(|&c| c == id)?;
        pos.checked_sub(1).map(|p| siblings[p])
    }

    /// Walk from `id` (inclusive) up to the root.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            doc: self,
            next: Some(id),
        }
    }

    /// True when `id` is `ancestor` or lives somewhere below it.
    pub fn is_inclusive_descendant(&self, id: NodeId, ancestor: NodeId) -> bool {
        self.ancestors(id).any(|a| a == ancestor)
    }

    /// Pre-order list of all nodes below `id` (exclusive).
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev());
        }
        out
    }

    /// Descendants of `id` carrying `class`, in document order.
    pub fn find_by_class(&self, id: NodeId, class: &str) -> Vec<NodeId> {
        self.descendants(id)
            .into_iter()
            .filter(|&n| self.has_class(n, class))
            .collect()
    }

    /// First direct child of `id` carrying `class`.
    pub fn child_with_class(&self, id: NodeId, class: &str) -> Option<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .find(|&c| self.has_class(c, class))
    }

    /// Look up a node by its DOM `id` attribute.
    pub fn find_by_dom_id(&self, dom_id: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| n.id.as_deref() == Some(dom_id))
            .map(NodeId)
    }

    // =========================================================================
    // Focus
    // =========================================================================

    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    /// Move focus to `id`. Returns true if focus changed.
    pub fn focus(&mut self, id: NodeId) -> bool {
        if self.focused == Some(id) {
            return false;
        }
        log::trace!("[focus] {:?} -> {}", self.focused, id);
        self.focused = Some(id);
        true
    }

    /// Clear focus. Returns true if something was focused.
    pub fn blur(&mut self) -> bool {
        self.focused.take().is_some()
    }

    /// True when the focused node is `id` or one of its descendants.
    pub fn focus_within(&self, id: NodeId) -> bool {
        self.focused
            .is_some_and(|f| self.is_inclusive_descendant(f, id))
    }
}

/// Iterator returned by [`Document::ancestors`].
pub struct Ancestors<'a> {
    doc: &'a Document,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.doc.parent(current);
        Some(current)
    }
}
