//! Project schema definitions.

use serde::{Deserialize, Serialize};
use tr_core::Position;
use tr_dot::{DotOptions, RenderFormat, Renderer};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub export: ExportSettings,
    #[serde(default)]
    pub nodes: Vec<NodeDef>,
    #[serde(default)]
    pub edges: Vec<EdgeDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NodeDef {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EdgeDef {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub bidirectional: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExportSettings {
    pub graph_name: String,
    /// Multiplier for fixed positions; 0 leaves layout to the renderer.
    pub scale: f64,
    pub renderer: String,
    pub formats: Vec<ImageFormat>,
}

impl Default for ExportSettings {
    fn default() -> Self {
        let options = DotOptions::default();
        Self {
            graph_name: options.graph_name,
            scale: options.scale,
            renderer: Renderer::default().program,
            formats: Vec::new(),
        }
    }
}

impl ExportSettings {
    pub fn dot_options(&self) -> DotOptions {
        DotOptions {
            graph_name: self.graph_name.clone(),
            scale: self.scale,
        }
    }

    pub fn renderer(&self) -> Renderer {
        Renderer::new(self.renderer.clone())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Png,
    Svg,
}

impl ImageFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
        }
    }
}

impl From<ImageFormat> for RenderFormat {
    fn from(format: ImageFormat) -> Self {
        match format {
            ImageFormat::Png => RenderFormat::Png,
            ImageFormat::Svg => RenderFormat::Svg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_document_uses_defaults() {
        let project: Project = serde_yaml::from_str("name: bare\n").unwrap();
        assert_eq!(project.export, ExportSettings::default());
        assert_eq!(project.export.graph_name, "trellis");
        assert_eq!(project.export.renderer, "dot");
        assert!(project.nodes.is_empty());
        assert!(project.edges.is_empty());
    }

    #[test]
    fn parses_full_document() {
        let yaml = r#"
name: demo
export:
  graph_name: demo
  scale: 0.02
  formats: [png, svg]
nodes:
  - { id: a, label: A, position: { x: 10, y: 20 } }
  - { id: b, label: B }
edges:
  - { from: a, to: b, label: "A to B" }
"#;
        let project: Project = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(project.export.scale, 0.02);
        assert_eq!(project.export.renderer, "dot");
        assert_eq!(project.export.formats, [ImageFormat::Png, ImageFormat::Svg]);
        assert_eq!(project.nodes[0].position, Some(Position { x: 10.0, y: 20.0 }));
        assert_eq!(project.nodes[1].position, None);
        assert!(!project.edges[0].bidirectional);
        assert_eq!(project.export.dot_options().graph_name, "demo");
    }

    #[test]
    fn unknown_format_is_rejected() {
        let yaml = "name: x\nexport:\n  formats: [gif]\n";
        assert!(serde_yaml::from_str::<Project>(yaml).is_err());
    }
}
