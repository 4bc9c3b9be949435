//! Dense cost matrices.
//!
//! Converts a cell graph into the square cost matrix consumed by the
//! Held-Karp solver.

mod matrix;

pub use matrix::{DistanceMatrix, ParallelEdges};
