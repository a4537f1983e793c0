//! Human-readable descriptions of nodes, edges and whole graphs.

use std::fmt;

use tr_core::{EdgeId, NodeId};

use crate::graph::Graph;

impl Graph {
    /// `Edge "<label>" from "<source>" to "<target>"`, or a notice for invalid edges.
    pub fn describe_edge(&self, id: EdgeId) -> Option<String> {
        let edge = self.edge(id)?;
        let endpoints = edge
            .endpoints()
            .and_then(|(s, t)| Some((self.node(s)?, self.node(t)?)));
        Some(match endpoints {
            Some((source, target)) => format!(
                "Edge \"{}\" from \"{}\" to \"{}\"",
                edge.label(),
                source.label(),
                target.label()
            ),
            None => "This edge is not valid".to_string(),
        })
    }

    /// The node line, optionally followed by one line per outgoing and incoming edge.
    pub fn describe_node(&self, id: NodeId, with_edges: bool) -> Option<String> {
        let node = self.node(id)?;
        let mut text = node.to_string();
        if with_edges {
            for &edge in node.outgoing() {
                if let Some(line) = self.describe_edge(edge) {
                    text.push_str(&format!("\n\tOUT : {line}"));
                }
            }
            for &edge in node.incoming() {
                if let Some(line) = self.describe_edge(edge) {
                    text.push_str(&format!("\n\tIN : {line}"));
                }
            }
        }
        Some(text)
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &id in self.node_ids() {
            if let Some(text) = self.describe_node(id, true) {
                writeln!(f, "{text}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_edges_with_labels() {
        let mut graph = Graph::new();
        let a = graph.create_node("A", None);
        let b = graph.create_node("B", None);
        let ab = graph.connect_nodes(a, b, false, "A to B").unwrap()[0];
        assert_eq!(
            graph.describe_edge(ab).unwrap(),
            "Edge \"A to B\" from \"A\" to \"B\""
        );
    }

    #[test]
    fn describes_node_with_both_directions() {
        let mut graph = Graph::new();
        let a = graph.create_node("A", None);
        let b = graph.create_node("B", None);
        graph.connect_nodes(a, b, true, "ab").unwrap();
        assert_eq!(
            graph.describe_node(a, true).unwrap(),
            "Node A [x=? ; y=?]\n\tOUT : Edge \"ab\" from \"A\" to \"B\"\n\tIN : Edge \"ab\" from \"B\" to \"A\""
        );
        assert_eq!(graph.describe_node(a, false).unwrap(), "Node A [x=? ; y=?]");
    }

    #[test]
    fn display_lists_every_node() {
        let mut graph = Graph::new();
        graph.create_node("A", None);
        graph.create_node("B", None);
        assert_eq!(graph.to_string(), "Node A [x=? ; y=?]\nNode B [x=? ; y=?]\n");
    }

    #[test]
    fn stale_handles_describe_nothing() {
        let mut graph = Graph::new();
        let a = graph.create_node("A", None);
        graph.delete_node(a).unwrap();
        assert!(graph.describe_node(a, true).is_none());
    }
}
