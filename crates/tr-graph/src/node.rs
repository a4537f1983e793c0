//! Nodes and the connect/disconnect protocol.

use std::fmt;

use tr_core::{EdgeId, NodeId, Position};

use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;

/// A graph vertex.
///
/// A node owns its outgoing edges and keeps non-owning backreferences to the
/// edges that target it, so deleting it can detach every neighbour.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub(crate) id: NodeId,
    pub(crate) label: String,
    pub(crate) position: Option<Position>,
    pub(crate) outgoing: Vec<EdgeId>,
    pub(crate) incoming: Vec<EdgeId>,
}

impl Node {
    pub(crate) fn new(id: NodeId, label: String, position: Option<Position>) -> Self {
        Self {
            id,
            label,
            position,
            outgoing: Vec::new(),
            incoming: Vec::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Fixed position, or `None` for a free node.
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    pub fn is_fixed(&self) -> bool {
        self.position.is_some()
    }

    /// Owned outgoing edges, in creation order.
    pub fn outgoing(&self) -> &[EdgeId] {
        &self.outgoing
    }

    /// Backreferences to edges targeting this node, in creation order.
    pub fn incoming(&self) -> &[EdgeId] {
        &self.incoming
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(pos) => write!(f, "Node {} [x={} ; y={}]", self.label, pos.x, pos.y),
            None => write!(f, "Node {} [x=? ; y=?]", self.label),
        }
    }
}

/// Mutable view of one live node, obtained from [`Graph::node_mut`].
///
/// All edge creation and removal for the node goes through here.
pub struct NodeMut<'g> {
    graph: &'g mut Graph,
    id: NodeId,
}

impl<'g> NodeMut<'g> {
    pub(crate) fn new(graph: &'g mut Graph, id: NodeId) -> Self {
        Self { graph, id }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Connect this node to `neighbour` with a labeled edge.
    ///
    /// A bidirectional request also links `neighbour` back to this node and
    /// returns `[reverse, forward]`; otherwise the result is `[forward]`.
    ///
    /// # Panics
    ///
    /// If more than `u32::MAX` edges are live at once.
    pub fn connect_to_node(
        &mut self,
        neighbour: NodeId,
        bidirectional: bool,
        label: impl Into<String>,
    ) -> GraphResult<Vec<EdgeId>> {
        if !self.graph.contains_node(neighbour) {
            tracing::warn!(node = %self.id, %neighbour, "cannot connect to a node outside the graph; ignored");
            return Err(GraphError::UnknownNode { node: neighbour });
        }
        let label = label.into();
        let forward = self.graph.link(self.id, neighbour, label.clone());
        if !bidirectional {
            return Ok(vec![forward]);
        }
        let reverse = self.graph.link(neighbour, self.id, label);
        Ok(vec![reverse, forward])
    }

    /// Destroy every outgoing edge to `target` and forget backreferences to edges
    /// that no longer exist.
    ///
    /// With `unregister_reverse_incoming`, `target` also drops its backreferences to
    /// the destroyed edges. Returns how many edges were destroyed.
    pub fn delete_edges_to_node(
        &mut self,
        target: NodeId,
        unregister_reverse_incoming: bool,
    ) -> GraphResult<usize> {
        if !self.graph.contains_node(target) {
            tracing::warn!(node = %self.id, %target, "cannot delete edges to a node outside the graph; ignored");
            return Err(GraphError::UnknownNode { node: target });
        }

        let doomed: Vec<EdgeId> = self
            .outgoing()
            .iter()
            .copied()
            .filter(|&e| {
                self.graph
                    .edges
                    .get(e)
                    .is_some_and(|edge| edge.connects(self.id, target))
            })
            .collect();
        for &edge in &doomed {
            self.graph.destroy_edge(edge, unregister_reverse_incoming);
        }

        // Edges from `target` are owned there and stay registered while live.
        let edges = &self.graph.edges;
        if let Some(node) = self.graph.nodes.get_mut(self.id) {
            node.incoming.retain(|&e| edges.contains(e));
        }

        tracing::debug!(node = %self.id, %target, destroyed = doomed.len(), "deleted edges to node");
        Ok(doomed.len())
    }

    /// Destroy one owned edge.
    ///
    /// With `remove_all_reverses`, the edge's target also destroys all of its own
    /// edges back to this node.
    pub fn delete_edge(&mut self, edge: EdgeId, remove_all_reverses: bool) -> GraphResult<()> {
        if !self.outgoing().contains(&edge) {
            tracing::warn!(node = %self.id, %edge, "edge is not owned by this node; it has been kept");
            return Err(GraphError::EdgeNotOwned {
                edge,
                node: self.id,
            });
        }
        let target = self.graph.edges.get(edge).and_then(|e| e.target());

        if remove_all_reverses && let Some(target) = target {
            self.graph
                .node_mut(target)?
                .delete_edges_to_node(self.id, true)?;
        }
        // A self-loop may already be gone through the reverse sweep.
        self.graph.destroy_edge(edge, true);
        Ok(())
    }

    /// Forget a backreference without destroying the edge.
    pub fn unregister_incoming_edge(&mut self, edge: EdgeId) -> GraphResult<()> {
        let Some(node) = self.graph.nodes.get_mut(self.id) else {
            return Err(GraphError::UnknownNode { node: self.id });
        };
        let Some(pos) = node.incoming.iter().position(|&e| e == edge) else {
            tracing::warn!(node = %self.id, %edge, "edge is not registered as incoming on this node");
            return Err(GraphError::BackrefNotFound {
                edge,
                node: self.id,
            });
        };
        node.incoming.remove(pos);
        Ok(())
    }

    /// Detach this node from every neighbour before it is removed from the graph.
    pub(crate) fn destroy(self) {
        // Neighbours this node points at: full two-way cleanup.
        let targets = self.distinct_endpoints(true);
        for target in targets {
            if let Ok(mut neighbour) = self.graph.node_mut(target)
                && let Err(err) = neighbour.delete_edges_to_node(self.id, true)
            {
                tracing::error!(node = %self.id, %target, %err, "cascade could not detach target");
            }
        }

        // Remaining sources: this node's incoming list is dropped below, so
        // they must not unregister from it.
        let sources = self.distinct_endpoints(false);
        for source in sources {
            if let Ok(mut neighbour) = self.graph.node_mut(source)
                && let Err(err) = neighbour.delete_edges_to_node(self.id, false)
            {
                tracing::error!(node = %self.id, %source, %err, "cascade could not detach source");
            }
        }

        let Some(node) = self.graph.nodes.get_mut(self.id) else {
            return;
        };
        let owned = std::mem::take(&mut node.outgoing);
        node.incoming.clear();
        for edge in owned {
            self.graph.destroy_edge(edge, true);
        }
        tracing::debug!(node = %self.id, "node detached");
    }

    fn outgoing(&self) -> &[EdgeId] {
        self.graph.nodes.get(self.id).map_or(&[], |n| &n.outgoing)
    }

    /// Distinct targets of outgoing edges, or distinct sources of incoming ones.
    fn distinct_endpoints(&self, outgoing: bool) -> Vec<NodeId> {
        let Some(node) = self.graph.nodes.get(self.id) else {
            return Vec::new();
        };
        let list = if outgoing { &node.outgoing } else { &node.incoming };
        let mut found = Vec::new();
        for &e in list {
            let Some(edge) = self.graph.edges.get(e) else {
                continue;
            };
            let other = if outgoing { edge.target() } else { edge.source() };
            if let Some(other) = other
                && !found.contains(&other)
            {
                found.push(other);
            }
        }
        found
    }
}
