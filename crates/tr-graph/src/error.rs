//! Graph-specific error types.

use thiserror::Error;
use tr_core::{EdgeId, NodeId};

pub type GraphResult<T> = Result<T, GraphError>;

/// Rejected graph operations and invariant violations.
///
/// Every rejected operation leaves the graph exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The handle does not name a live node of this graph.
    #[error("Node {node} is not in the graph")]
    UnknownNode { node: NodeId },

    /// The handle does not name a live edge of this graph.
    #[error("Edge {edge} is not in the graph")]
    UnknownEdge { edge: EdgeId },

    /// The edge is not among the node's outgoing edges.
    #[error("Edge {edge} is not owned by node {node}")]
    EdgeNotOwned { edge: EdgeId, node: NodeId },

    /// The edge is not registered as incoming on the node.
    #[error("Edge {edge} is not registered as incoming on node {node}")]
    BackrefNotFound { edge: EdgeId, node: NodeId },

    /// Bookkeeping is inconsistent.
    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}
