//! History cells and their panels.

use std::fmt;

use tabledom::NodeId;

/// Position of a history cell in the widget's cell list (document order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellIndex(pub usize);

impl fmt::Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cell {}", self.0)
    }
}

/// Where a panel is in its open/close cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    AnimatingOpen,
    Open,
    AnimatingClosed,
}

/// The hidden notes block owned by a history cell.
#[derive(Debug, Clone)]
pub struct HistoryPanel {
    pub node: NodeId,
    /// Natural height measured the last time the panel opened.
    pub measured_height: u16,
    pub has_close_control: bool,
}

/// A table cell with recorded history notes.
#[derive(Debug, Clone)]
pub struct HistoryCell {
    pub node: NodeId,
    /// Identifier shared by the panel's `id` and the cell's `aria-controls`.
    pub accessible_id: String,
    pub expanded: bool,
    pub panel: HistoryPanel,
}
