//! tr-dot: Graphviz DOT export for trellis graphs.
//!
//! - `emit`: deterministic DOT text from a [`tr_graph::Graph`]
//! - `render`: invoke an external Graphviz binary on the written file

pub mod emit;
pub mod error;
pub mod render;

pub use emit::{DotOptions, to_dot, write_dot};
pub use error::{DotError, DotResult};
pub use render::{ExportRequest, RenderFormat, Renderer, export};
