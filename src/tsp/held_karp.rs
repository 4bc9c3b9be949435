//! Held-Karp dynamic programming for the travelling salesman cycle.
//!
//! # Algorithm
//!
//! Vertex 0 is the depot. For every subset `S ⊆ {1, …, n-1}` and every vertex
//! `v ∉ S`, `C(v, S)` is the cheapest path that leaves 0, visits exactly the
//! vertices of `S`, and ends at `v`:
//!
//! ```text
//! C(v, ∅) = d(0, v)
//! C(v, S) = min over u ∈ S of  d(u, v) + C(u, S \ {u})
//! ```
//!
//! Subsets are processed in ascending size, so every `C(u, S \ {u})` is final
//! before it is read. The optimal cycle closes at the `v` minimizing
//! `d(v, 0) + C(v, {1, …, n-1} \ {v})`, and the visiting order is recovered
//! by following the recorded predecessors back to the empty subset.
//!
//! `C` is stored flat, keyed by `(v - 1) · 2ⁿ⁻¹ + mask` where bit `i` of
//! `mask` stands for vertex `i + 1`.
//!
//! # Complexity
//!
//! O(2ⁿ · n²) time, O(2ⁿ · n) space. See [`MAX_VERTICES`] for the practical
//! ceiling; inputs beyond it run, but slowly and with a large table.
//!
//! # Reference
//!
//! Held, M. & Karp, R.M. (1962). "A dynamic programming approach to
//! sequencing problems", *Journal of the Society for Industrial and Applied
//! Mathematics* 10(1), 196-210.

use log::{debug, warn};

use super::Tour;
use crate::distance::DistanceMatrix;
use crate::error::{PlanError, Result};

/// Practical vertex-count ceiling for [`HeldKarp`].
///
/// At 24 vertices the table holds about 190M states (roughly 1.7 GB) and
/// each further vertex doubles it. This is not enforced: larger inputs are
/// solved if the table fits in memory, with a warning logged.
pub const MAX_VERTICES: usize = 24;

const NO_PREDECESSOR: u8 = u8::MAX;

/// Finds the minimum-cost cycle through every vertex of `distances`.
///
/// # Examples
///
/// ```
/// use u_coverage::distance::DistanceMatrix;
/// use u_coverage::tsp::solve_tsp;
///
/// // Unit square: sides cost 1, diagonals √2
/// let d = std::f64::consts::SQRT_2;
/// let dm = DistanceMatrix::from_rows(&[
///     vec![0.0, 1.0, d, 1.0],
///     vec![1.0, 0.0, 1.0, d],
///     vec![d, 1.0, 0.0, 1.0],
///     vec![1.0, d, 1.0, 0.0],
/// ]).unwrap();
///
/// let tour = solve_tsp(&dm).unwrap();
/// assert!((tour.cost - 4.0).abs() < 1e-10);
/// assert_eq!(tour.order[0], 0);
/// assert_eq!(tour.len(), 4);
/// ```
pub fn solve_tsp(distances: &DistanceMatrix) -> Result<Tour> {
    HeldKarp::new(distances).solve()
}

/// Exact TSP solver over a dense cost matrix.
///
/// Missing edges must be `f64::INFINITY`; a matrix with no finite
/// Hamiltonian cycle produces an infeasible [`Tour`] rather than an error.
pub struct HeldKarp<'a> {
    distances: &'a DistanceMatrix,
}

/// Fully populated DP tables.
struct Table {
    subsets: usize,
    cost: Vec<f64>,
    prev: Vec<u8>,
}

impl Table {
    fn key(&self, vertex: usize, mask: usize) -> usize {
        (vertex - 1) * self.subsets + mask
    }
}

fn bit(vertex: usize) -> usize {
    1 << (vertex - 1)
}

/// Number of DP states for `n >= 2` vertices, or `None` if the subset masks
/// or the table size overflow `usize`, or a predecessor no longer fits in a
/// `u8`.
fn table_len(n: usize) -> Option<usize> {
    let others = n.checked_sub(1)?;
    if others >= usize::from(NO_PREDECESSOR) {
        return None;
    }
    let subsets = 1usize.checked_shl(u32::try_from(others).ok()?)?;
    subsets.checked_mul(others)
}

impl<'a> HeldKarp<'a> {
    /// Creates a solver over `distances`.
    pub fn new(distances: &'a DistanceMatrix) -> Self {
        Self { distances }
    }

    /// Solves for the optimal tour.
    ///
    /// # Errors
    ///
    /// [`PlanError::TableOverflow`] if the DP table for this many vertices
    /// cannot be indexed at all.
    pub fn solve(&self) -> Result<Tour> {
        let n = self.distances.size();
        match n {
            0 => {
                return Ok(Tour {
                    cost: 0.0,
                    order: Vec::new(),
                })
            }
            1 => {
                return Ok(Tour {
                    cost: 0.0,
                    order: vec![0],
                })
            }
            _ => {}
        }

        let len = table_len(n).ok_or(PlanError::TableOverflow { vertices: n })?;
        if n > MAX_VERTICES {
            warn!("[HeldKarp] {n} vertices exceeds the practical ceiling of {MAX_VERTICES}");
        }
        let table = self.fill(n, len);
        let full = table.subsets - 1;

        let mut best_cost = f64::INFINITY;
        let mut last = None;
        for v in 1..n {
            let path = table.cost[table.key(v, full & !bit(v))];
            let cost = self.distances.get(v, 0) + path;
            if cost < best_cost {
                best_cost = cost;
                last = Some(v);
            }
        }

        let Some(last) = last else {
            debug!("[HeldKarp] no finite cycle through {n} vertices");
            return Ok(Tour::infeasible());
        };

        Ok(Tour {
            cost: best_cost,
            order: Self::reconstruct(&table, last),
        })
    }

    fn fill(&self, n: usize, len: usize) -> Table {
        let subsets = 1usize << (n - 1);
        let mut table = Table {
            subsets,
            cost: vec![f64::INFINITY; len],
            prev: vec![NO_PREDECESSOR; len],
        };
        debug!("[HeldKarp] {n} vertices, {} states", table.cost.len());

        let mut masks: Vec<usize> = (0..subsets).collect();
        masks.sort_by_key(|m| m.count_ones());

        for &mask in &masks {
            for v in 1..n {
                if mask & bit(v) != 0 {
                    continue;
                }
                let key = table.key(v, mask);

                if mask == 0 {
                    table.cost[key] = self.distances.get(0, v);
                    table.prev[key] = 0;
                    continue;
                }

                let mut best = f64::INFINITY;
                let mut best_prev = NO_PREDECESSOR;
                let mut rest = mask;
                while rest != 0 {
                    let u = rest.trailing_zeros() as usize + 1;
                    rest &= rest - 1;
                    let via = table.cost[table.key(u, mask & !bit(u))];
                    let cost = self.distances.get(u, v) + via;
                    if cost < best {
                        best = cost;
                        best_prev = u as u8;
                    }
                }
                table.cost[key] = best;
                table.prev[key] = best_prev;
            }
        }
        table
    }

    /// Walks predecessors back from `last` to the depot.
    fn reconstruct(table: &Table, last: usize) -> Vec<usize> {
        let mut order = vec![last];
        let mut vertex = last;
        let mut mask = (table.subsets - 1) & !bit(last);

        while mask != 0 {
            let prev = table.prev[table.key(vertex, mask)];
            if prev == NO_PREDECESSOR {
                break;
            }
            vertex = usize::from(prev);
            order.push(vertex);
            mask &= !bit(vertex);
        }

        order.push(0);
        order.reverse();
        order
    }
}
