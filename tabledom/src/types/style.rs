use super::{Display, Edges, Position};

/// Inline style of a node.
///
/// `width` and `height` are outer sizes (borders included). `None` means the
/// size comes from layout: cells stretch to their row, blocks measure their
/// content.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub display: Display,
    pub position: Position,
    pub width: Option<u16>,
    pub height: Option<u16>,
    pub left: Option<i16>,
    pub top: Option<i16>,
    pub border: Edges,
    pub padding: Edges,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn display(mut self, display: Display) -> Self {
        self.display = display;
        self
    }

    pub fn hidden(self) -> Self {
        self.display(Display::None)
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: u16) -> Self {
        self.height = Some(height);
        self
    }

    pub fn border(mut self, border: Edges) -> Self {
        self.border = border;
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    pub fn is_hidden(&self) -> bool {
        self.display == Display::None
    }

    /// Whether the node participates in its parent's flow.
    pub fn in_flow(&self) -> bool {
        !self.is_hidden() && self.position == Position::Static
    }
}
