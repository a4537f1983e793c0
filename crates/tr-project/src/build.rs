//! Conversion between project files and live graphs.

use std::collections::{BTreeMap, HashMap};

use tr_core::NodeId;
use tr_graph::Graph;

use crate::ProjectResult;
use crate::schema::{EdgeDef, ExportSettings, NodeDef, Project};
use crate::validate::validate_project;

/// A graph built from a project, with the handle of every project node.
#[derive(Debug, Clone)]
pub struct BuiltGraph {
    pub graph: Graph,
    pub ids: BTreeMap<String, NodeId>,
}

/// Validate `project` and build its graph. Nodes keep their file order.
pub fn build_graph(project: &Project) -> ProjectResult<BuiltGraph> {
    validate_project(project)?;

    let mut graph = Graph::new();
    let mut ids = BTreeMap::new();
    for node in &project.nodes {
        ids.insert(node.id.clone(), graph.create_node(&node.label, node.position));
    }

    for edge in &project.edges {
        let (Some(&from), Some(&to)) = (ids.get(&edge.from), ids.get(&edge.to)) else {
            continue;
        };
        graph.connect_nodes(from, to, edge.bidirectional, edge.label.as_str())?;
    }

    tracing::debug!(
        project = %project.name,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "built graph from project"
    );
    Ok(BuiltGraph { graph, ids })
}

/// Describe `graph` as a project. Nodes are named `n0`, `n1`, ... in graph
/// order and every edge is written as a single directed entry.
pub fn project_from_graph(name: impl Into<String>, graph: &Graph) -> Project {
    let names: HashMap<NodeId, String> = graph
        .node_ids()
        .iter()
        .enumerate()
        .map(|(i, &id)| (id, format!("n{i}")))
        .collect();

    let nodes = graph
        .nodes()
        .map(|node| NodeDef {
            id: names[&node.id()].clone(),
            label: node.label().to_string(),
            position: node.position(),
        })
        .collect();

    let edges = graph
        .edges()
        .filter_map(|(_, edge)| {
            let (from, to) = edge.endpoints()?;
            Some(EdgeDef {
                from: names.get(&from)?.clone(),
                to: names.get(&to)?.clone(),
                label: edge.label().to_string(),
                bidirectional: false,
            })
        })
        .collect();

    Project {
        name: name.into(),
        export: ExportSettings::default(),
        nodes,
        edges,
    }
}
