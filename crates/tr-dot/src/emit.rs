//! DOT text generation.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::path::Path;

use tr_graph::{Graph, NodeId};

use crate::error::{DotError, DotResult};

/// Options controlling DOT emission.
#[derive(Debug, Clone, PartialEq)]
pub struct DotOptions {
    /// Name written after `digraph`.
    pub graph_name: String,
    /// Multiplier applied to fixed positions; 0 lays every node out freely.
    pub scale: f64,
}

impl Default for DotOptions {
    fn default() -> Self {
        Self {
            graph_name: "trellis".to_string(),
            scale: 0.0,
        }
    }
}

/// Render the graph as DOT text.
///
/// Nodes are numbered in insertion order; edges follow their source node.
/// The same graph and options always produce the same bytes.
pub fn to_dot(graph: &Graph, options: &DotOptions) -> String {
    let index: HashMap<NodeId, usize> = graph
        .node_ids()
        .iter()
        .enumerate()
        .map(|(i, &id)| (id, i))
        .collect();

    let mut out = String::new();
    let _ = writeln!(out, "digraph {}{{", options.graph_name);

    for (i, node) in graph.nodes().enumerate() {
        let _ = writeln!(out, "\t{i}[");
        let _ = writeln!(out, "\t\tlabel = \"{}\"", escape(node.label()));
        if let Some(pos) = node.position()
            && options.scale > 0.0
        {
            let (x, y) = pos.scaled(options.scale);
            let _ = writeln!(out, "\t\tpos = \"{x},{y}\"");
        }
        let _ = writeln!(out, "\t]");
    }

    for (_, edge) in graph.edges() {
        let Some((source, target)) = edge.endpoints() else {
            continue;
        };
        let (Some(from), Some(to)) = (index.get(&source), index.get(&target)) else {
            continue;
        };
        let _ = writeln!(out, "\t{from} -> {to} [label = \"{}\"]", escape(edge.label()));
    }

    out.push_str("}\n");
    out
}

/// Write the DOT text for `graph` to `path`.
pub fn write_dot(graph: &Graph, path: &Path, options: &DotOptions) -> DotResult<()> {
    std::fs::write(path, to_dot(graph, options)).map_err(|e| DotError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::info!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "wrote DOT file"
    );
    Ok(())
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(c),
        }
    }
    escaped
}
