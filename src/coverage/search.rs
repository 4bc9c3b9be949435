//! Repeated randomized depth-first coverage search.
//!
//! # Algorithm
//!
//! One attempt is a depth-first traversal from the start cell. On entering a
//! cell it is marked covered and recorded, then its incident edges are
//! shuffled and each uncovered neighbor is descended into in turn. Returning
//! from a neighbor drives back through the current cell, which counts as an
//! extraneous visit. An attempt ends when the start cell has no uncovered
//! neighbor left, i.e. its whole connected component is covered.
//!
//! The shuffle is the only source of variation between attempts. Attempts
//! repeat until the time budget is spent (checked only between attempts),
//! and the walk with the fewest recorded cells wins, the earliest on ties.
//!
//! # Complexity
//!
//! O(V + E) per attempt.

use std::time::Instant;

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::{CoverageConfig, CoverageWalk};
use crate::error::{PlanError, Result};
use crate::graph::{Graph, VisitState};

/// Finds a short complete-coverage walk of `graph` starting at `start`.
///
/// Shorthand for [`CoverageSearch::new`] followed by
/// [`CoverageSearch::run`].
///
/// # Examples
///
/// ```
/// use u_coverage::graph::Graph;
/// use u_coverage::coverage::{find_coverage_walk, CoverageConfig};
///
/// // 2x2 grid of cells: 0-1 on top, 2-3 below
/// let graph = Graph::from_edges(0..4, &[
///     (0, 1, 1.0), (2, 3, 1.0), (0, 2, 1.0), (1, 3, 1.0),
/// ]).unwrap();
///
/// let config = CoverageConfig::default().with_seed(42).with_max_attempts(20);
/// let walk = find_coverage_walk(&graph, 0, &config).unwrap();
///
/// assert_eq!(walk.cells[0], 0);
/// assert!(walk.covers(&graph));
/// assert!(walk.is_drivable(&graph));
/// ```
pub fn find_coverage_walk<L>(
    graph: &Graph<L>,
    start: usize,
    config: &CoverageConfig,
) -> Result<CoverageWalk> {
    CoverageSearch::new(graph, config.clone()).run(start)
}

/// Repeated randomized DFS over a borrowed graph.
///
/// The graph is only read; visitation state is owned by each run, so one
/// graph can back several searches.
pub struct CoverageSearch<'a, L> {
    graph: &'a Graph<L>,
    config: CoverageConfig,
}

/// A cell on the DFS stack with its shuffled edges and the next one to try.
struct Frame {
    node: usize,
    edges: Vec<usize>,
    cursor: usize,
}

impl Frame {
    fn enter<L, R: Rng>(graph: &Graph<L>, node: usize, rng: &mut R) -> Self {
        let mut edges = graph
            .node(node)
            .map(|n| n.edges().to_vec())
            .unwrap_or_default();
        edges.shuffle(rng);
        Self {
            node,
            edges,
            cursor: 0,
        }
    }

    fn next_edge(&mut self) -> Option<usize> {
        let edge = self.edges.get(self.cursor).copied();
        self.cursor += 1;
        edge
    }
}

impl<'a, L> CoverageSearch<'a, L> {
    /// Creates a search over `graph`.
    pub fn new(graph: &'a Graph<L>, config: CoverageConfig) -> Self {
        Self { graph, config }
    }

    /// Runs the search, seeding from the configured seed or from the OS.
    ///
    /// # Errors
    ///
    /// [`PlanError::UnknownNode`] if `start` is not in a non-empty graph.
    pub fn run(&self, start: usize) -> Result<CoverageWalk> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        self.run_with_rng(start, &mut rng)
    }

    /// Runs the search with a caller-supplied RNG.
    ///
    /// An empty graph yields an empty walk with zero attempts. Otherwise at
    /// least one attempt completes regardless of the budget. Cells not
    /// reachable from `start` are silently left out of the walk; use
    /// [`CoverageWalk::covers`] or [`Graph::is_connected`] to detect that.
    pub fn run_with_rng<R: Rng>(&self, start: usize, rng: &mut R) -> Result<CoverageWalk> {
        if self.graph.is_empty() {
            return Ok(CoverageWalk::empty());
        }
        if self.graph.node(start).is_none() {
            return Err(PlanError::UnknownNode {
                node: start,
                len: self.graph.num_nodes(),
            });
        }

        let started = Instant::now();
        let mut state = VisitState::new(self.graph.num_nodes());

        let mut best = self.attempt(start, &mut state, rng)?;
        state.reset();
        let mut attempts = 1;

        while !self.exhausted(started, attempts) {
            let walk = self.attempt(start, &mut state, rng)?;
            state.reset();
            attempts += 1;
            trace!(
                "[Coverage] attempt {attempts}: {} cells, {} extraneous",
                walk.len(),
                walk.extraneous_visits
            );
            if walk.len() < best.len() {
                best = walk;
            }
        }

        best.attempts = attempts;
        debug!(
            "[Coverage] best of {attempts} attempts from {start}: {} of {} cells in {:?}",
            best.len(),
            self.graph.num_nodes(),
            started.elapsed()
        );
        Ok(best)
    }

    /// Runs a single randomized DFS from `start`.
    ///
    /// `state` must be fully reset on entry and is left marking every cell
    /// covered by this attempt.
    ///
    /// # Errors
    ///
    /// [`PlanError::UnknownNode`] or [`PlanError::UnknownEdge`] if the walk
    /// reaches an edge that does not resolve to a node of the graph, which
    /// only happens for graphs that fail [`Graph::validate`].
    pub fn attempt<R: Rng>(
        &self,
        start: usize,
        state: &mut VisitState,
        rng: &mut R,
    ) -> Result<CoverageWalk> {
        state.mark(start);
        let mut cells = vec![start];
        let mut route = vec![start];
        let mut extraneous_visits = 0;
        let mut stack = vec![Frame::enter(self.graph, start, rng)];

        while let Some(frame) = stack.last_mut() {
            let node = frame.node;
            match frame.next_edge() {
                Some(edge) => {
                    let next = self.graph.neighbor_of(node, edge)?;
                    if next >= self.graph.num_nodes() {
                        return Err(PlanError::UnknownNode {
                            node: next,
                            len: self.graph.num_nodes(),
                        });
                    }
                    if !state.is_visited(next) {
                        state.mark(next);
                        cells.push(next);
                        route.push(next);
                        stack.push(Frame::enter(self.graph, next, rng));
                    }
                }
                None => {
                    stack.pop();
                    // Back out through the parent cell.
                    if let Some(parent) = stack.last() {
                        extraneous_visits += 1;
                        route.push(parent.node);
                    }
                }
            }
        }

        Ok(CoverageWalk {
            cells,
            route,
            extraneous_visits,
            attempts: 1,
        })
    }

    fn exhausted(&self, started: Instant, attempts: usize) -> bool {
        if self
            .config
            .max_attempts
            .is_some_and(|max| attempts >= max)
        {
            return true;
        }
        started.elapsed() > self.config.time_budget
    }
}
