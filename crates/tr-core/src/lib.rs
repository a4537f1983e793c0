//! tr-core: stable foundation for trellis.
//!
//! Contains:
//! - ids (generation-checked handles for nodes and edges)
//! - geometry (fixed node positions)
//! - error (shared error types)

pub mod error;
pub mod geometry;
pub mod ids;

// Re-exports: nice ergonomics for downstream crates
pub use error::{TrError, TrResult};
pub use geometry::*;
pub use ids::*;
