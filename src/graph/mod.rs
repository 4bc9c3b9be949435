//! Graph model for cell adjacency.
//!
//! Cells produced by an area decomposition become [`Node`]s; shared
//! boundaries between cells become weighted [`Edge`]s. Nodes and edges are
//! stored in arenas owned by [`Graph`] and addressed by index, so the node
//! index doubles as the row/column of the adjacency matrix built from it.

mod cell_graph;
mod node;
mod visit;

pub use cell_graph::Graph;
pub use node::{Edge, Node};
pub use visit::VisitState;
