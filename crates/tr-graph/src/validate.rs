//! Graph bookkeeping validation.

use std::collections::HashSet;

use tr_core::{EdgeId, NodeId};

use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;

fn violation(what: String) -> GraphError {
    GraphError::Invariant { what }
}

/// Validate ownership and backreference bookkeeping across the whole graph.
pub(crate) fn validate_graph(graph: &Graph) -> GraphResult<()> {
    // Registry order lists every live node exactly once
    let mut seen: HashSet<NodeId> = HashSet::new();
    for &id in &graph.order {
        if !seen.insert(id) {
            return Err(violation(format!("node {id} appears twice in the registry")));
        }
        if !graph.nodes.contains(id) {
            return Err(violation(format!("registry lists dead node {id}")));
        }
    }
    if seen.len() != graph.nodes.len() {
        return Err(violation(format!(
            "registry holds {} nodes but {} are live",
            seen.len(),
            graph.nodes.len()
        )));
    }

    // Every edge has live endpoints, one owner (its source) and one backreference
    let mut owned: HashSet<EdgeId> = HashSet::new();
    for (node_id, node) in graph.nodes.iter() {
        if node.id != node_id {
            return Err(violation(format!(
                "node stored under {node_id} believes it is {}",
                node.id
            )));
        }
        for &edge_id in &node.outgoing {
            let Some(edge) = graph.edges.get(edge_id) else {
                return Err(violation(format!("node {node_id} owns dead edge {edge_id}")));
            };
            if edge.source() != Some(node_id) {
                return Err(violation(format!(
                    "node {node_id} owns edge {edge_id} whose source is {:?}",
                    edge.source()
                )));
            }
            if !owned.insert(edge_id) {
                return Err(violation(format!("edge {edge_id} is owned twice")));
            }
        }
        for &edge_id in &node.incoming {
            let Some(edge) = graph.edges.get(edge_id) else {
                return Err(violation(format!(
                    "node {node_id} keeps a backreference to dead edge {edge_id}"
                )));
            };
            if edge.target() != Some(node_id) {
                return Err(violation(format!(
                    "node {node_id} keeps a backreference to edge {edge_id} targeting {:?}",
                    edge.target()
                )));
            }
        }
    }

    for (edge_id, edge) in graph.edges.iter() {
        let Some((source, target)) = edge.endpoints() else {
            return Err(violation(format!("stored edge {edge_id} is invalid")));
        };
        if !owned.contains(&edge_id) {
            return Err(violation(format!("edge {edge_id} has no owner")));
        }
        let Some(target_node) = graph.nodes.get(target) else {
            return Err(violation(format!(
                "edge {edge_id} from {source} targets dead node {target}"
            )));
        };
        let backrefs = target_node.incoming.iter().filter(|&&e| e == edge_id).count();
        if backrefs != 1 {
            return Err(violation(format!(
                "edge {edge_id} is registered {backrefs} times on its target {target}"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_empty_graph() {
        assert!(validate_graph(&Graph::new()).is_ok());
    }

    #[test]
    fn detects_missing_backref() {
        let mut graph = Graph::new();
        let a = graph.create_node("A", None);
        let b = graph.create_node("B", None);
        graph.connect_nodes(a, b, false, "").unwrap();
        graph.nodes.get_mut(b).unwrap().incoming.clear();

        let result = validate_graph(&graph);
        assert!(matches!(result, Err(GraphError::Invariant { .. })));
    }

    #[test]
    fn detects_duplicate_registry_entry() {
        let mut graph = Graph::new();
        let a = graph.create_node("A", None);
        graph.order.push(a);
        assert!(validate_graph(&graph).is_err());
    }

    #[test]
    fn detects_orphan_edge() {
        let mut graph = Graph::new();
        let a = graph.create_node("A", None);
        let b = graph.create_node("B", None);
        graph.connect_nodes(a, b, false, "").unwrap();
        graph.nodes.get_mut(a).unwrap().outgoing.clear();
        assert!(validate_graph(&graph).is_err());
    }
}
