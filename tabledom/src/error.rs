use thiserror::Error;

use crate::element::NodeId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomError {
    /// The node has no parent, so it cannot get siblings.
    #[error("node {0} is not attached to a parent")]
    Detached(NodeId),
    /// Layout was requested for a node that is not a table.
    #[error("node {0} is not a table")]
    NotATable(NodeId),
}
