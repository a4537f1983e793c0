//! tr-graphml: GraphML import for trellis.
//!
//! Reads the subset of GraphML written by yEd: nodes carry a `ShapeNode` with
//! geometry and label, edges carry `Arrows` describing their direction.

pub mod direction;
pub mod error;
pub mod import;

pub use direction::Direction;
pub use error::{GraphmlError, GraphmlResult};
pub use import::{ImportReport, import_file, import_str};
