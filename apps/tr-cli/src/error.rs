//! Error type for the command line front end.

use std::path::PathBuf;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Project error: {0}")]
    Project(#[from] tr_project::ProjectError),

    #[error("Graph error: {0}")]
    Graph(#[from] tr_graph::GraphError),

    #[error("Export error: {0}")]
    Dot(#[from] tr_dot::DotError),

    #[error("Import error: {0}")]
    Graphml(#[from] tr_graphml::GraphmlError),

    #[error("Failed to create output directory: {path}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
}
