//! Exact closed tours over a small set of waypoints.
//!
//! - [`HeldKarp`] — subset dynamic programming, O(2ⁿ · n²) time
//! - [`Tour`] — optimal cycle cost and visiting order
//! - [`tour_cost`] — cost of a given closed visiting order

mod held_karp;
mod tour;

pub use held_karp::{solve_tsp, HeldKarp, MAX_VERTICES};
pub use tour::{tour_cost, Tour};
