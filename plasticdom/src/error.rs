use crate::document::NodeId;

/// Errors raised by document operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("node {0} is not in the document")]
    NodeNotFound(NodeId),
    #[error("node {0} has no parent")]
    NoParent(NodeId),
    #[error("node {child} is not a child of {parent}")]
    NotAChild { parent: NodeId, child: NodeId },
    #[error("inserting {child} under {parent} would create a cycle")]
    WouldCycle { parent: NodeId, child: NodeId },
}
