//! tr-graph: graph/model layer for trellis.
//!
//! Provides:
//! - Edge records owned by their source node
//! - Nodes with outgoing edges and incoming backreferences
//! - The Graph registry: node lifetime, connect/delete protocol, deletion cascade
//! - Invariant checking and textual descriptions
//!
//! # Example
//!
//! ```
//! use tr_graph::Graph;
//!
//! let mut graph = Graph::new();
//! let a = graph.create_node("A", None);
//! let b = graph.create_node("B", None);
//! let edges = graph.connect_nodes(a, b, true, "A - B").unwrap();
//! assert_eq!(edges.len(), 2);
//!
//! graph.delete_node(a).unwrap();
//! assert_eq!(graph.node_count(), 1);
//! assert_eq!(graph.edge_count(), 0);
//! ```

mod arena;
pub mod describe;
pub mod edge;
pub mod error;
pub mod graph;
pub mod node;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use edge::Edge;
pub use error::{GraphError, GraphResult};
pub use graph::Graph;
pub use node::{Node, NodeMut};
pub use tr_core::{EdgeId, NodeId, Position};
