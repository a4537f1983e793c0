use std::path::PathBuf;

pub type GraphmlResult<T> = Result<T, GraphmlError>;

/// Failures that abort a whole import. Per-record problems are reported
/// in [`crate::ImportReport`] instead.
#[derive(Debug, thiserror::Error)]
pub enum GraphmlError {
    #[error("Failed to read GraphML file: {path}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed GraphML document: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("GraphML document has no {0} element")]
    MissingElement(&'static str),
}
