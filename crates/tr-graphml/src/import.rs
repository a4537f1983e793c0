//! GraphML document walking.

use std::collections::BTreeMap;
use std::path::Path;

use roxmltree::{Document, Node as XmlNode};
use tr_core::Position;
use tr_graph::{Graph, NodeId};

use crate::direction::Direction;
use crate::error::{GraphmlError, GraphmlResult};

/// Outcome of an import.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Created nodes, keyed by their GraphML id.
    pub nodes: BTreeMap<String, NodeId>,
    /// Number of graph edges created (a bidirectional record counts twice).
    pub edges_created: usize,
    /// GraphML ids of node records that were ignored.
    pub skipped_nodes: Vec<String>,
    /// GraphML ids of edge records that were ignored.
    pub skipped_edges: Vec<String>,
}

/// Read a GraphML file and add its nodes and edges to `graph`.
pub fn import_file(graph: &mut Graph, path: &Path) -> GraphmlResult<ImportReport> {
    let text = std::fs::read_to_string(path).map_err(|e| GraphmlError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    import_str(graph, &text)
}

/// Parse GraphML text and add its nodes and edges to `graph`.
///
/// Structural problems abort before anything is added. Individual nodes or
/// edges that cannot be decoded are skipped with a warning.
pub fn import_str(graph: &mut Graph, text: &str) -> GraphmlResult<ImportReport> {
    let document = Document::parse(text)?;
    let xml_graph = first_child(document.root_element(), "graph")
        .ok_or(GraphmlError::MissingElement("graph"))?;
    let xml_nodes: Vec<XmlNode> = children(xml_graph, "node").collect();
    if xml_nodes.is_empty() {
        return Err(GraphmlError::MissingElement("node"));
    }

    let mut report = ImportReport::default();
    for xml_node in xml_nodes {
        import_node(graph, xml_node, &mut report);
    }

    let xml_edges: Vec<XmlNode> = children(xml_graph, "edge").collect();
    if xml_edges.is_empty() {
        tracing::warn!("GraphML document has no edge element; only nodes were imported");
    }
    for xml_edge in xml_edges {
        import_edge(graph, xml_edge, &mut report);
    }

    tracing::info!(
        nodes = report.nodes.len(),
        edges = report.edges_created,
        skipped_nodes = report.skipped_nodes.len(),
        skipped_edges = report.skipped_edges.len(),
        "GraphML import finished"
    );
    Ok(report)
}

fn import_node(graph: &mut Graph, xml_node: XmlNode, report: &mut ImportReport) {
    let Some(id) = xml_node.attribute("id") else {
        tracing::warn!("node without id attribute; ignored");
        report.skipped_nodes.push(String::new());
        return;
    };
    let decoded = if report.nodes.contains_key(id) {
        Err("duplicate node id")
    } else {
        decode_node(xml_node)
    };
    match decoded {
        Ok((name, position)) => {
            let node = graph.create_node(name, Some(position));
            report.nodes.insert(id.to_string(), node);
        }
        Err(why) => {
            tracing::warn!(node = id, "{why}; node ignored");
            report.skipped_nodes.push(id.to_string());
        }
    }
}

/// Label and position of a yEd shape node.
fn decode_node<'a>(xml_node: XmlNode<'a, '_>) -> Result<(&'a str, Position), &'static str> {
    let mut geometry = None;
    let mut label = None;
    for data in xml_node.children().filter(XmlNode::is_element) {
        for shape in children(data, "ShapeNode") {
            geometry = first_child(shape, "Geometry");
            label = first_child(shape, "NodeLabel");
        }
    }
    let geometry = geometry.ok_or("missing data/ShapeNode/Geometry")?;
    let label = label.ok_or("missing data/ShapeNode/NodeLabel")?;
    let name = label
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or("empty NodeLabel")?;
    let x = coordinate(geometry, "x").ok_or("missing or unreadable Geometry x")?;
    let y = coordinate(geometry, "y").ok_or("missing or unreadable Geometry y")?;
    let position = Position::new(x, y).map_err(|_| "non-finite Geometry position")?;
    Ok((name, position))
}

fn import_edge(graph: &mut Graph, xml_edge: XmlNode, report: &mut ImportReport) {
    let Some(id) = xml_edge.attribute("id") else {
        tracing::warn!("edge without id attribute; ignored");
        report.skipped_edges.push(String::new());
        return;
    };
    let (source, target) = match endpoints(xml_edge, &report.nodes) {
        Ok(pair) => pair,
        Err(why) => {
            tracing::warn!(edge = id, "{why}; edge ignored");
            report.skipped_edges.push(id.to_string());
            return;
        }
    };

    // The last Arrows element found decides direction.
    let mut arrows = None;
    let mut label = String::new();
    for data in children(xml_edge, "data") {
        for style in data.children().filter(XmlNode::is_element) {
            if let Some(found) = first_child(style, "Arrows") {
                arrows = Some(found);
            }
            if let Some(text) = first_child(style, "EdgeLabel").and_then(|l| l.text()) {
                label = text.trim().to_string();
            }
        }
    }
    let direction = match arrows {
        Some(arrows) => {
            Direction::from_arrows(arrows.attribute("source"), arrows.attribute("target"))
        }
        None => {
            tracing::warn!(edge = id, "no Arrows element; edge added in both directions");
            Direction::Both
        }
    };

    let created = match direction {
        Direction::Both => graph.connect_nodes(source, target, true, label),
        Direction::SourceToTarget => graph.connect_nodes(source, target, false, label),
        Direction::TargetToSource => graph.connect_nodes(target, source, false, label),
    };
    match created {
        Ok(edges) => report.edges_created += edges.len(),
        Err(err) => {
            tracing::warn!(edge = id, %err, "edge could not be connected; ignored");
            report.skipped_edges.push(id.to_string());
        }
    }
}

/// Graph nodes named by the `source` and `target` attributes.
fn endpoints(
    xml_edge: XmlNode,
    nodes: &BTreeMap<String, NodeId>,
) -> Result<(NodeId, NodeId), &'static str> {
    let source_id = xml_edge.attribute("source").ok_or("missing source attribute")?;
    let target_id = xml_edge.attribute("target").ok_or("missing target attribute")?;
    let source = nodes.get(source_id).ok_or("source node was not imported")?;
    let target = nodes.get(target_id).ok_or("target node was not imported")?;
    Ok((*source, *target))
}

fn coordinate(geometry: XmlNode, name: &str) -> Option<f64> {
    geometry.attribute(name)?.trim().parse().ok()
}

fn children<'a, 'input>(
    parent: XmlNode<'a, 'input>,
    name: &'static str,
) -> impl Iterator<Item = XmlNode<'a, 'input>> {
    parent
        .children()
        .filter(move |c| c.is_element() && c.tag_name().name() == name)
}

fn first_child<'a, 'input>(
    parent: XmlNode<'a, 'input>,
    name: &'static str,
) -> Option<XmlNode<'a, 'input>> {
    children(parent, name).next()
}

#[cfg(test)]
mod tests {
    use super::*;

    const YED_NODE: &str = r#"<data key="d6"><y:ShapeNode><y:Geometry height="30.0" width="30.0" x="{x}" y="{y}"/><y:NodeLabel>{label}</y:NodeLabel></y:ShapeNode></data>"#;

    fn node(id: &str, label: &str, x: f64, y: f64) -> String {
        format!(
            r#"<node id="{id}">{}</node>"#,
            YED_NODE
                .replace("{x}", &x.to_string())
                .replace("{y}", &y.to_string())
                .replace("{label}", label)
        )
    }

    fn document(body: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<graphml xmlns="http://graphml.graphdrawing.org/xmlns" xmlns:y="http://www.yworks.com/xml/graphml">
  <graph edgedefault="directed" id="G">{body}</graph>
</graphml>"#
        )
    }

    #[test]
    fn imports_fixed_nodes() {
        let text = document(&format!("{}{}", node("n0", "A", 10.0, 20.0), node("n1", "B", -3.5, 0.0)));
        let mut graph = Graph::new();
        let report = import_str(&mut graph, &text).unwrap();

        assert_eq!(report.nodes.len(), 2);
        let a = graph.node(report.nodes["n0"]).unwrap();
        assert_eq!(a.label(), "A");
        assert_eq!(a.position(), Some(Position::new(10.0, 20.0).unwrap()));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn node_without_shape_is_skipped() {
        let text = document(&format!(
            r#"{}<node id="n1"><data key="d6"/></node><node id="n2"/>"#,
            node("n0", "A", 0.0, 0.0)
        ));
        let mut graph = Graph::new();
        let report = import_str(&mut graph, &text).unwrap();
        assert_eq!(graph.node_count(), 1);
        assert_eq!(report.skipped_nodes, ["n1", "n2"]);
    }

    #[test]
    fn unreadable_coordinate_is_skipped() {
        let text = document(&node("n0", "A", 0.0, 0.0).replace(r#"x="0""#, r#"x="left""#));
        let mut graph = Graph::new();
        let report = import_str(&mut graph, &text).unwrap();
        assert_eq!(graph.node_count(), 0);
        assert_eq!(report.skipped_nodes, ["n0"]);
    }

    #[test]
    fn missing_graph_element_aborts() {
        let mut graph = Graph::new();
        let err = import_str(&mut graph, r#"<graphml xmlns="http://graphml.graphdrawing.org/xmlns"/>"#)
            .unwrap_err();
        assert!(matches!(err, GraphmlError::MissingElement("graph")));
    }

    #[test]
    fn graph_without_nodes_aborts() {
        let mut graph = Graph::new();
        let err = import_str(&mut graph, &document("")).unwrap_err();
        assert!(matches!(err, GraphmlError::MissingElement("node")));
    }

    #[test]
    fn malformed_xml_aborts() {
        let mut graph = Graph::new();
        let err = import_str(&mut graph, "<graphml><graph>").unwrap_err();
        assert!(matches!(err, GraphmlError::Xml(_)));
    }
}
