//! # u-coverage
//!
//! Coverage planning over decomposed areas: an autonomous vehicle must pass
//! through every cell of a cell decomposition, crossing only between
//! adjacent cells, and may also need the cheapest closed loop over a small
//! set of waypoints.
//!
//! ## Modules
//!
//! - [`graph`] — Cell adjacency graph (nodes, weighted edges, visitation state)
//! - [`distance`] — Dense cost matrix built from a graph
//! - [`coverage`] — Randomized repeated-DFS complete-coverage walks
//! - [`tsp`] — Exact Held-Karp closed tours
//! - [`error`] — Error type shared by all modules

pub mod coverage;
pub mod distance;
pub mod error;
pub mod graph;
pub mod tsp;

pub use error::{PlanError, Result};
