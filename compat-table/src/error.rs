use tabledom::NodeId;
use thiserror::Error;

/// Problems detected while activating the widget on a table.
///
/// Interaction never fails: requests that arrive while an animation runs are
/// dropped, not reported.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WidgetError {
    #[error("node {0} is not a table")]
    NotATable(NodeId),

    #[error("table {0} already has an active widget")]
    AlreadyActivated(NodeId),

    /// A cell is marked as having history but carries no panel.
    #[error("history cell {0} has no history panel")]
    MissingPanel(NodeId),

    #[error(transparent)]
    Dom(#[from] tabledom::DomError),
}
