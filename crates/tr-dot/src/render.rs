//! External Graphviz invocation.

use std::path::{Path, PathBuf};
use std::process::Command;

use tr_graph::Graph;

use crate::emit::{DotOptions, write_dot};
use crate::error::{DotError, DotResult};

/// Image format produced by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderFormat {
    Png,
    Svg,
}

impl RenderFormat {
    pub fn flag(self) -> &'static str {
        match self {
            RenderFormat::Png => "-Tpng",
            RenderFormat::Svg => "-Tsvg",
        }
    }
}

/// A Graphviz-compatible renderer binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renderer {
    pub program: String,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            program: "dot".to_string(),
        }
    }
}

impl Renderer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Arguments passed to the renderer. `fixed_layout` selects the `fdp`
    /// engine, which honours node positions.
    pub fn args(
        &self,
        dot_path: &Path,
        out_path: &Path,
        format: RenderFormat,
        fixed_layout: bool,
    ) -> Vec<String> {
        let mut args = Vec::with_capacity(5);
        if fixed_layout {
            args.push("-Kfdp".to_string());
        }
        args.push(format.flag().to_string());
        args.push(dot_path.display().to_string());
        args.push("-o".to_string());
        args.push(out_path.display().to_string());
        args
    }

    /// Render `dot_path` into `out_path`, waiting for the process to finish.
    pub fn render(
        &self,
        dot_path: &Path,
        out_path: &Path,
        format: RenderFormat,
        fixed_layout: bool,
    ) -> DotResult<()> {
        let output = Command::new(&self.program)
            .args(self.args(dot_path, out_path, format, fixed_layout))
            .output()
            .map_err(|e| DotError::Spawn {
                program: self.program.clone(),
                source: e,
            })?;
        if !output.status.success() {
            return Err(DotError::RendererFailed {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        tracing::info!(out = %out_path.display(), ?format, "rendered image");
        Ok(())
    }
}

/// A DOT file plus the images to render from it.
#[derive(Debug, Clone, Default)]
pub struct ExportRequest {
    pub dot_path: PathBuf,
    pub images: Vec<(RenderFormat, PathBuf)>,
    pub options: DotOptions,
    pub renderer: Renderer,
}

/// Write the DOT file, then render every requested image.
pub fn export(graph: &Graph, request: &ExportRequest) -> DotResult<()> {
    write_dot(graph, &request.dot_path, &request.options)?;
    let fixed_layout = graph.has_fixed_nodes();
    for (format, out_path) in &request.images {
        request
            .renderer
            .render(&request.dot_path, out_path, *format, fixed_layout)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_layout_args() {
        let args = Renderer::default().args(
            Path::new("g.dot"),
            Path::new("g.png"),
            RenderFormat::Png,
            false,
        );
        assert_eq!(args, ["-Tpng", "g.dot", "-o", "g.png"]);
    }

    #[test]
    fn fixed_layout_selects_fdp() {
        let args = Renderer::default().args(
            Path::new("g.dot"),
            Path::new("g.svg"),
            RenderFormat::Svg,
            true,
        );
        assert_eq!(args, ["-Kfdp", "-Tsvg", "g.dot", "-o", "g.svg"]);
    }

    #[test]
    fn missing_program_is_spawn_error() {
        let renderer = Renderer::new("trellis-no-such-renderer");
        let err = renderer
            .render(
                Path::new("in.dot"),
                Path::new("out.png"),
                RenderFormat::Png,
                false,
            )
            .unwrap_err();
        assert!(matches!(err, DotError::Spawn { .. }));
    }
}
