//! Coverage walk result.

use serde::{Deserialize, Serialize};

use crate::graph::Graph;

/// A complete-coverage walk found by [`CoverageSearch`](super::CoverageSearch).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageWalk {
    /// Cells in first-visit order, each exactly once.
    pub cells: Vec<usize>,
    /// The route actually driven: `cells` interleaved with the backtracking
    /// steps through already-covered cells, ending back at the start.
    /// Consecutive entries are always adjacent.
    pub route: Vec<usize>,
    /// Number of passes back through an already-covered cell.
    pub extraneous_visits: usize,
    /// Number of search attempts made to find this walk.
    pub attempts: usize,
}

impl CoverageWalk {
    pub(crate) fn empty() -> Self {
        Self {
            cells: Vec::new(),
            route: Vec::new(),
            extraneous_visits: 0,
            attempts: 0,
        }
    }

    /// Number of recorded cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if no cell was recorded.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns `true` if every node of `graph` appears in `cells` exactly
    /// once.
    pub fn covers<L>(&self, graph: &Graph<L>) -> bool {
        if self.cells.len() != graph.num_nodes() {
            return false;
        }
        let mut seen = vec![false; graph.num_nodes()];
        for &cell in &self.cells {
            match seen.get_mut(cell) {
                Some(s) if !*s => *s = true,
                _ => return false,
            }
        }
        true
    }

    /// Returns `true` if every consecutive pair of `route` is joined by an
    /// edge of `graph`.
    pub fn is_drivable<L>(&self, graph: &Graph<L>) -> bool {
        self.route
            .windows(2)
            .all(|pair| graph.are_adjacent(pair[0], pair[1]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn star() -> Graph<()> {
        Graph::from_edges([(), (), ()], &[(0, 1, 1.0), (0, 2, 1.0)]).expect("valid graph")
    }

    fn walk(cells: Vec<usize>, route: Vec<usize>) -> CoverageWalk {
        CoverageWalk {
            cells,
            route,
            extraneous_visits: 2,
            attempts: 1,
        }
    }

    #[test]
    fn test_covers() {
        let g = star();
        assert!(walk(vec![0, 2, 1], vec![]).covers(&g));
        assert!(!walk(vec![0, 2], vec![]).covers(&g));
        assert!(!walk(vec![0, 2, 2], vec![]).covers(&g));
        assert!(!walk(vec![0, 2, 7], vec![]).covers(&g));
    }

    #[test]
    fn test_is_drivable() {
        let g = star();
        assert!(walk(vec![0, 1, 2], vec![0, 1, 0, 2, 0]).is_drivable(&g));
        assert!(!walk(vec![0, 1, 2], vec![0, 1, 2]).is_drivable(&g));
    }

    #[test]
    fn test_empty() {
        let w = CoverageWalk::empty();
        assert!(w.is_empty());
        assert_eq!(w.len(), 0);
        assert!(w.covers(&Graph::<()>::new()));
        assert!(w.is_drivable(&Graph::<()>::new()));
    }
}
