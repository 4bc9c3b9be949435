//! Complete-coverage walks over a cell graph.
//!
//! A coverage walk starts in a given cell and reaches every other cell by
//! crossing only shared boundaries (graph edges). The search runs repeated
//! randomized depth-first traversals within a time budget and keeps the
//! shortest one found.
//!
//! - [`CoverageConfig`] — time budget, seed and attempt cap
//! - [`CoverageSearch`] — the repeated randomized DFS
//! - [`CoverageWalk`] — the recorded cell order plus the driven route

mod config;
mod search;
mod walk;

pub use config::{CoverageConfig, DEFAULT_TIME_BUDGET};
pub use search::{find_coverage_walk, CoverageSearch};
pub use walk::CoverageWalk;
