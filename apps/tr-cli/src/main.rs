mod demo;
mod error;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tr_dot::{ExportRequest, RenderFormat};
use tr_graph::Graph;
use tr_project::{ExportSettings, build_graph, load_yaml, project_from_graph, save_yaml};

use crate::error::CliResult;

#[derive(Parser)]
#[command(name = "tr-cli")]
#[command(about = "Trellis CLI - build, inspect and export labeled directed graphs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate project file syntax and structure
    Validate {
        /// Path to the project YAML file
        project_path: PathBuf,
    },
    /// Print every node with its outgoing and incoming edges
    Show {
        /// Project YAML file or yEd GraphML file
        input: PathBuf,
    },
    /// Write a DOT file and optionally render images with Graphviz
    Export {
        /// Project YAML file or yEd GraphML file
        input: PathBuf,
        /// Output DOT file
        #[arg(long)]
        dot: PathBuf,
        /// Render a PNG image to this path
        #[arg(long)]
        png: Option<PathBuf>,
        /// Render an SVG image to this path
        #[arg(long)]
        svg: Option<PathBuf>,
        /// Position scale; 0 lets Graphviz lay out every node
        #[arg(long, value_parser = parse_scale)]
        scale: Option<f64>,
    },
    /// Import a yEd GraphML file
    Import {
        /// Path to the GraphML file
        graphml_path: PathBuf,
        /// Save the imported graph as a project YAML file
        #[arg(long)]
        project: Option<PathBuf>,
    },
    /// Build and tear down the five-node example, one DOT file per step
    Demo {
        /// Directory receiving scratchNN.dot files
        #[arg(long)]
        out_dir: PathBuf,
        /// Also render a PNG for every step
        #[arg(long)]
        render: bool,
    },
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { project_path } => cmd_validate(&project_path),
        Commands::Show { input } => cmd_show(&input),
        Commands::Export {
            input,
            dot,
            png,
            svg,
            scale,
        } => cmd_export(&input, dot, png, svg, scale),
        Commands::Import {
            graphml_path,
            project,
        } => cmd_import(&graphml_path, project.as_deref()),
        Commands::Demo { out_dir, render } => cmd_demo(&out_dir, render),
    }
}

fn cmd_validate(project_path: &Path) -> CliResult<()> {
    println!("Validating project: {}", project_path.display());
    let project = load_yaml(project_path)?;
    let built = build_graph(&project)?;
    built.graph.validate()?;
    println!(
        "✓ Project is valid ({} nodes, {} edges)",
        built.graph.node_count(),
        built.graph.edge_count()
    );
    Ok(())
}

fn cmd_show(input: &Path) -> CliResult<()> {
    let (graph, _) = load_graph(input)?;
    if graph.is_empty() {
        println!("Graph is empty");
    } else {
        print!("{graph}");
    }
    Ok(())
}

fn cmd_export(
    input: &Path,
    dot: PathBuf,
    png: Option<PathBuf>,
    svg: Option<PathBuf>,
    scale: Option<f64>,
) -> CliResult<()> {
    let (graph, settings) = load_graph(input)?;

    let mut options = settings.dot_options();
    if let Some(scale) = scale {
        options.scale = scale;
    }

    let mut images = Vec::new();
    if let Some(path) = png {
        images.push((RenderFormat::Png, path));
    }
    if let Some(path) = svg {
        images.push((RenderFormat::Svg, path));
    }
    if images.is_empty() {
        for format in &settings.formats {
            images.push(((*format).into(), dot.with_extension(format.extension())));
        }
    }

    let request = ExportRequest {
        dot_path: dot,
        images,
        options,
        renderer: settings.renderer(),
    };
    tr_dot::export(&graph, &request)?;

    println!("✓ Wrote {}", request.dot_path.display());
    for (_, path) in &request.images {
        println!("✓ Rendered {}", path.display());
    }
    Ok(())
}

fn cmd_import(graphml_path: &Path, project_path: Option<&Path>) -> CliResult<()> {
    let mut graph = Graph::new();
    let report = tr_graphml::import_file(&mut graph, graphml_path)?;
    println!(
        "✓ Imported {} nodes and {} edges",
        report.nodes.len(),
        report.edges_created
    );
    if !report.skipped_nodes.is_empty() || !report.skipped_edges.is_empty() {
        println!(
            "  Skipped: {} nodes, {} edges",
            report.skipped_nodes.len(),
            report.skipped_edges.len()
        );
    }

    if let Some(path) = project_path {
        let name = graphml_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "imported".to_string());
        save_yaml(path, &project_from_graph(name, &graph))?;
        println!("✓ Saved project: {}", path.display());
    } else {
        print!("{graph}");
    }
    Ok(())
}

fn cmd_demo(out_dir: &Path, render: bool) -> CliResult<()> {
    let written = demo::run_demo(out_dir, render)?;
    println!("✓ Wrote {} steps to {}", written.len(), out_dir.display());
    Ok(())
}

/// Accept only finite, non-negative scales, like `validate_project` does.
fn parse_scale(text: &str) -> Result<f64, String> {
    let scale: f64 = text.parse().map_err(|e| format!("{e}"))?;
    if !scale.is_finite() || scale < 0.0 {
        return Err(format!("scale must be finite and non-negative, got {text}"));
    }
    Ok(scale)
}

/// Load a graph from a GraphML file (by extension) or a project file.
fn load_graph(input: &Path) -> CliResult<(Graph, ExportSettings)> {
    let is_graphml = input
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("graphml"));
    if is_graphml {
        let mut graph = Graph::new();
        tr_graphml::import_file(&mut graph, input)?;
        Ok((graph, ExportSettings::default()))
    } else {
        let project = load_yaml(input)?;
        let built = build_graph(&project)?;
        Ok((built.graph, project.export))
    }
}
