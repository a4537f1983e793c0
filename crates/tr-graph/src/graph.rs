//! The graph registry: sole owner of nodes.

use tr_core::{EdgeId, NodeId, Position};

use crate::arena::Arena;
use crate::edge::Edge;
use crate::error::{GraphError, GraphResult};
use crate::node::{Node, NodeMut};
use crate::validate;

/// A directed graph of labeled nodes and edges.
///
/// The graph stores:
/// - Nodes and edges in generational arenas (handles never dangle).
/// - Node insertion order, used for stable export indexing.
///
/// Edges are owned by their source node; the graph only routes requests to it.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    pub(crate) nodes: Arena<NodeId, Node>,
    pub(crate) edges: Arena<EdgeId, Edge>,
    pub(crate) order: Vec<NodeId>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node and return its handle. Always succeeds.
    ///
    /// # Panics
    ///
    /// If more than `u32::MAX` nodes are live at once.
    pub fn create_node(&mut self, label: impl Into<String>, position: Option<Position>) -> NodeId {
        let label = label.into();
        let id = self
            .nodes
            .insert_with(|id| Node::new(id, label, position));
        self.order.push(id);
        id
    }

    /// Connect `from` to `to`; see [`NodeMut::connect_to_node`].
    pub fn connect_nodes(
        &mut self,
        from: NodeId,
        to: NodeId,
        bidirectional: bool,
        label: impl Into<String>,
    ) -> GraphResult<Vec<EdgeId>> {
        self.node_mut(from)?
            .connect_to_node(to, bidirectional, label)
    }

    /// Remove a node, destroying every edge from or to it.
    pub fn delete_node(&mut self, node: NodeId) -> GraphResult<()> {
        let Some(position) = self.order.iter().position(|&n| n == node) else {
            tracing::warn!(%node, "trying to delete a node which is not in the graph; ignored");
            return Err(GraphError::UnknownNode { node });
        };
        self.node_mut(node)?.destroy();
        self.nodes.remove(node);
        self.order.remove(position);
        Ok(())
    }

    /// Remove an edge through its source node; see [`NodeMut::delete_edge`].
    pub fn delete_edge(&mut self, edge: EdgeId, remove_all_reverses: bool) -> GraphResult<()> {
        let Some(source) = self.edges.get(edge).and_then(Edge::source) else {
            tracing::warn!(%edge, "trying to delete an edge which is not in the graph; ignored");
            return Err(GraphError::UnknownEdge { edge });
        };
        self.node_mut(source)?
            .delete_edge(edge, remove_all_reverses)
    }

    /// Remove every node and edge. All previously issued handles become stale.
    pub fn clear(&mut self) {
        self.edges.clear();
        self.nodes.clear();
        self.order.clear();
    }

    /// Mutable protocol view of a live node.
    pub fn node_mut(&mut self, id: NodeId) -> GraphResult<NodeMut<'_>> {
        if !self.nodes.contains(id) {
            tracing::warn!(node = %id, "node is not in the graph");
            return Err(GraphError::UnknownNode { node: id });
        }
        Ok(NodeMut::new(self, id))
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.order.iter().filter_map(|&id| self.nodes.get(id))
    }

    /// Node handles in insertion order.
    pub fn node_ids(&self) -> &[NodeId] {
        &self.order
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id)
    }

    /// Every edge, grouped by source in node order, then by creation order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> {
        self.nodes().flat_map(move |node| {
            node.outgoing
                .iter()
                .filter_map(move |&id| self.edges.get(id).map(|edge| (id, edge)))
        })
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains(id)
    }

    pub fn contains_edge(&self, id: EdgeId) -> bool {
        self.edges.contains(id)
    }

    /// Position of a node in insertion order (its export index).
    pub fn index_of(&self, id: NodeId) -> Option<usize> {
        self.order.iter().position(|&n| n == id)
    }

    /// True if any node has a fixed position.
    pub fn has_fixed_nodes(&self) -> bool {
        self.nodes().any(Node::is_fixed)
    }

    /// Check every bookkeeping invariant.
    pub fn validate(&self) -> GraphResult<()> {
        validate::validate_graph(self)
    }

    /// Create one edge and register it on both endpoints. Both must be live.
    pub(crate) fn link(&mut self, from: NodeId, to: NodeId, label: String) -> EdgeId {
        let edge = self.edges.insert(Edge::new(Some(from), Some(to), label));
        if let Some(source) = self.nodes.get_mut(from) {
            source.outgoing.push(edge);
        }
        if let Some(target) = self.nodes.get_mut(to) {
            target.incoming.push(edge);
        }
        edge
    }

    /// The single edge destruction path.
    ///
    /// Removes the edge from its source's outgoing list and, when asked, from its
    /// target's incoming list, then frees it. Returns `None` if it was already gone.
    pub(crate) fn destroy_edge(&mut self, edge: EdgeId, unregister_incoming: bool) -> Option<Edge> {
        let record = self.edges.remove(edge)?;
        if let Some(source) = record.source().and_then(|id| self.nodes.get_mut(id)) {
            source.outgoing.retain(|&e| e != edge);
        }
        if unregister_incoming
            && let Some(target) = record.target().and_then(|id| self.nodes.get_mut(id))
        {
            target.incoming.retain(|&e| e != edge);
        }
        Some(record)
    }
}
