//! Error types for coverage planning.

use thiserror::Error;

/// Precondition violations raised by graph construction and the planners.
///
/// Disconnected input is deliberately *not* represented here: a coverage
/// walk over a disconnected graph covers the reachable component, and a
/// tour over an incomplete matrix has infinite cost.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    /// A node index outside the graph.
    #[error("node {node} is not in the graph ({len} nodes)")]
    UnknownNode { node: usize, len: usize },

    /// An edge index outside the graph.
    #[error("edge {edge} is not in the graph ({len} edges)")]
    UnknownEdge { edge: usize, len: usize },

    /// A node paired with an edge it is not an endpoint of.
    #[error("node {node} is not an endpoint of edge {edge}")]
    NotIncident { node: usize, edge: usize },

    /// An edge whose two endpoints are the same node.
    #[error("edge endpoints must be distinct, got {node} twice")]
    SelfLoop { node: usize },

    /// A negative or NaN edge weight.
    #[error("edge weight must be non-negative, got {0}")]
    InvalidWeight(f64),

    /// A Held-Karp table too large to index on this platform.
    #[error("Held-Karp table for {vertices} vertices cannot be addressed")]
    TableOverflow { vertices: usize },
}

pub type Result<T> = std::result::Result<T, PlanError>;
