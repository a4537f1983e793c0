//! Step-by-step construction and teardown of the five-node example graph.

use std::path::{Path, PathBuf};

use tr_dot::{DotOptions, ExportRequest, RenderFormat, Renderer, export};
use tr_graph::Graph;

use crate::error::{CliError, CliResult};

/// Writes one numbered DOT file (and optionally a PNG) per step.
struct Snapshots<'a> {
    out_dir: &'a Path,
    render: bool,
    written: Vec<PathBuf>,
}

impl Snapshots<'_> {
    fn take(&mut self, graph: &Graph) -> CliResult<()> {
        let stem = format!("scratch{:02}", self.written.len());
        let dot_path = self.out_dir.join(format!("{stem}.dot"));
        let mut images = Vec::new();
        if self.render {
            images.push((RenderFormat::Png, self.out_dir.join(format!("{stem}.png"))));
        }
        let request = ExportRequest {
            dot_path: dot_path.clone(),
            images,
            options: DotOptions::default(),
            renderer: Renderer::default(),
        };
        export(graph, &request)?;
        self.written.push(dot_path);
        Ok(())
    }
}

/// Build A..E one step at a time, then delete nodes and edges, snapshotting
/// the graph after every operation. Returns the DOT files written.
pub fn run_demo(out_dir: &Path, render: bool) -> CliResult<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir).map_err(|e| CliError::CreateDir {
        path: out_dir.to_path_buf(),
        source: e,
    })?;
    let mut snap = Snapshots {
        out_dir,
        render,
        written: Vec::new(),
    };
    let mut graph = Graph::new();

    snap.take(&graph)?;
    let a = graph.create_node("A", None);
    snap.take(&graph)?;
    let b = graph.create_node("B", None);
    snap.take(&graph)?;
    graph.connect_nodes(a, b, false, "A to B")?;
    snap.take(&graph)?;
    let c = graph.create_node("C", None);
    snap.take(&graph)?;
    graph.connect_nodes(b, c, false, "B to C")?;
    snap.take(&graph)?;
    let d = graph.create_node("D", None);
    snap.take(&graph)?;
    let cd = graph.connect_nodes(c, d, false, "C to D")?[0];
    snap.take(&graph)?;
    graph.connect_nodes(d, a, false, "D to A")?;
    snap.take(&graph)?;
    let e = graph.create_node("E", None);
    snap.take(&graph)?;
    graph.connect_nodes(a, e, true, "A - E")?;
    snap.take(&graph)?;
    let de = graph.connect_nodes(d, e, true, "D - E")?;
    snap.take(&graph)?;

    graph.delete_node(a)?;
    snap.take(&graph)?;
    graph.delete_edge(de[0], false)?;
    snap.take(&graph)?;
    graph.delete_edge(cd, false)?;
    snap.take(&graph)?;
    graph.connect_nodes(b, e, true, "B - E")?;
    snap.take(&graph)?;
    let cd_pair = graph.connect_nodes(c, d, true, "C - D")?;
    snap.take(&graph)?;
    graph.delete_node(e)?;
    snap.take(&graph)?;
    graph.delete_edge(cd_pair[0], true)?;
    snap.take(&graph)?;
    graph.delete_node(d)?;
    snap.take(&graph)?;
    graph.delete_node(b)?;
    snap.take(&graph)?;
    graph.delete_node(c)?;
    snap.take(&graph)?;

    tracing::info!(steps = snap.written.len(), dir = %out_dir.display(), "demo finished");
    Ok(snap.written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_writes_every_step() {
        let dir = std::env::temp_dir().join("tr_cli_demo_steps");
        let written = run_demo(&dir, false).unwrap();

        assert_eq!(written.len(), 22);
        assert!(written[0].ends_with("scratch00.dot"));
        assert!(written[21].ends_with("scratch21.dot"));

        let empty = "digraph trellis{\n}\n";
        assert_eq!(std::fs::read_to_string(&written[0]).unwrap(), empty);
        assert_eq!(std::fs::read_to_string(&written[21]).unwrap(), empty);

        // after deleting A: B->C, C->D, E->D, D->E
        let after_a = std::fs::read_to_string(&written[12]).unwrap();
        assert_eq!(after_a.matches(" -> ").count(), 4);
        assert!(!after_a.contains("\"A\""));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
