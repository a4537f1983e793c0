use std::path::PathBuf;

pub type DotResult<T> = Result<T, DotError>;

#[derive(Debug, thiserror::Error)]
pub enum DotError {
    #[error("Failed to write DOT file: {path}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to start renderer '{program}'")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("Renderer '{program}' exited with {status}: {stderr}")]
    RendererFailed {
        program: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
}
