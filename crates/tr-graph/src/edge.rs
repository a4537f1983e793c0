//! Directed, labeled connection records.

use tr_core::NodeId;

/// A directed edge from `source` to `target`.
///
/// Edges are owned by their source node and never change after construction.
/// Validity is decided once: an edge missing either endpoint is invalid forever.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    source: Option<NodeId>,
    target: Option<NodeId>,
    label: String,
    valid: bool,
}

impl Edge {
    /// Build an edge record. Graph operations only create edges with both endpoints.
    pub fn new(source: Option<NodeId>, target: Option<NodeId>, label: impl Into<String>) -> Self {
        let label = label.into();
        if source.is_none() {
            tracing::warn!(label = %label, "edge created without a source node; it is invalid");
        }
        if target.is_none() {
            tracing::warn!(label = %label, "edge created without a target node; it is invalid");
        }
        Self {
            valid: source.is_some() && target.is_some(),
            source,
            target,
            label,
        }
    }

    pub fn source(&self) -> Option<NodeId> {
        self.source
    }

    pub fn target(&self) -> Option<NodeId> {
        self.target
    }

    /// Both endpoints, if the edge is valid.
    pub fn endpoints(&self) -> Option<(NodeId, NodeId)> {
        Some((self.source?, self.target?))
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub(crate) fn connects(&self, from: NodeId, to: NodeId) -> bool {
        self.source == Some(from) && self.target == Some(to)
    }
}
