//! Dense distance matrix.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::graph::Graph;

/// How to resolve several edges joining the same pair of nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ParallelEdges {
    /// The last matching edge in the row node's incident list wins.
    #[default]
    LastScanned,
    /// The cheapest matching edge wins.
    Minimum,
}

/// A dense n×n cost matrix stored in row-major order.
///
/// Entry `(i, j)` is the cost of moving from node `i` to node `j`: 0 on the
/// diagonal, the edge weight for adjacent nodes, and `f64::INFINITY` where
/// no edge exists.
///
/// # Examples
///
/// ```
/// use u_coverage::graph::Graph;
/// use u_coverage::distance::DistanceMatrix;
///
/// let graph = Graph::from_edges(['A', 'B', 'C'], &[(0, 1, 2.0), (1, 2, 3.0)]).unwrap();
/// let dm = DistanceMatrix::from_graph(&graph);
///
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.get(0, 1), 2.0);
/// assert_eq!(dm.get(2, 1), 3.0);
/// assert!(dm.get(0, 2).is_infinite());
/// assert!(dm.is_symmetric(1e-10));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Builds the adjacency cost matrix of `graph`, letting the last scanned
    /// parallel edge win.
    pub fn from_graph<L>(graph: &Graph<L>) -> Self {
        Self::from_graph_with(graph, ParallelEdges::LastScanned)
    }

    /// Builds the adjacency cost matrix of `graph` with an explicit policy
    /// for parallel edges.
    ///
    /// Each row is filled by scanning the row node's incident edges for one
    /// touching the column node, so the cost is O(n² · degree). Intended for
    /// graphs of tens of nodes.
    pub fn from_graph_with<L>(graph: &Graph<L>, policy: ParallelEdges) -> Self {
        let n = graph.num_nodes();
        let mut dm = Self::new(n);

        for (row, node) in graph.nodes().iter().enumerate() {
            for col in 0..n {
                if row == col {
                    continue;
                }
                let mut cost = f64::INFINITY;
                for edge in node.edges().iter().filter_map(|&e| graph.edge(e)) {
                    if edge.other(row) != Some(col) {
                        continue;
                    }
                    cost = match policy {
                        ParallelEdges::LastScanned => edge.weight(),
                        ParallelEdges::Minimum => cost.min(edge.weight()),
                    };
                }
                dm.set(row, col, cost);
            }
        }

        trace!("[DistanceMatrix] built {n}x{n} from {} edges", graph.num_edges());
        dm
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Creates a distance matrix from nested rows.
    ///
    /// Returns `None` unless every row has as many entries as there are rows.
    pub fn from_rows(rows: &[Vec<f64>]) -> Option<Self> {
        let size = rows.len();
        if rows.iter().any(|r| r.len() != size) {
            return None;
        }
        Some(Self {
            data: rows.concat(),
            size,
        })
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    ///
    /// Matching infinities count as equal.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                let (a, b) = (self.get(i, j), self.get(j, i));
                if a == b {
                    continue;
                }
                if (a - b).abs() > tol || a.is_nan() || b.is_nan() {
                    return false;
                }
            }
        }
        true
    }

    /// Returns `true` if every off-diagonal entry is finite, i.e. the matrix
    /// encodes a complete graph.
    pub fn is_complete(&self) -> bool {
        (0..self.size).all(|i| {
            (0..self.size).all(|j| i == j || self.get(i, j).is_finite())
        })
    }
}
