//! Tour type and cost evaluation.

use serde::{Deserialize, Serialize};

use crate::distance::DistanceMatrix;

/// A closed tour anchored at vertex 0.
///
/// `order` lists every vertex once, starting with 0; the return leg from
/// the last vertex to 0 is implied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    /// Total cost of the cycle, `f64::INFINITY` if no cycle exists.
    pub cost: f64,
    /// Visiting order; empty when no finite cycle exists.
    pub order: Vec<usize>,
}

impl Tour {
    /// A tour with no finite cycle.
    pub fn infeasible() -> Self {
        Self {
            cost: f64::INFINITY,
            order: Vec::new(),
        }
    }

    /// Returns `true` if the tour has finite cost.
    pub fn is_feasible(&self) -> bool {
        self.cost.is_finite()
    }

    /// Number of vertices visited.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the tour visits no vertex.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Computes the cost of the closed cycle `order[0] → … → order[n-1] → order[0]`.
///
/// Orders of fewer than two vertices cost 0.
///
/// # Examples
///
/// ```
/// use u_coverage::distance::DistanceMatrix;
/// use u_coverage::tsp::tour_cost;
///
/// let dm = DistanceMatrix::from_rows(&[
///     vec![0.0, 1.0, 4.0],
///     vec![1.0, 0.0, 2.0],
///     vec![4.0, 2.0, 0.0],
/// ]).unwrap();
/// assert_eq!(tour_cost(&dm, &[0, 1, 2]), 7.0);
/// ```
pub fn tour_cost(distances: &DistanceMatrix, order: &[usize]) -> f64 {
    if order.len() < 2 {
        return 0.0;
    }
    let legs: f64 = order
        .windows(2)
        .map(|pair| distances.get(pair[0], pair[1]))
        .sum();
    legs + distances.get(order[order.len() - 1], order[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tour_cost_includes_return_leg() {
        let mut dm = DistanceMatrix::new(3);
        dm.set(0, 1, 1.0);
        dm.set(1, 2, 2.0);
        dm.set(2, 0, 10.0);
        assert_eq!(tour_cost(&dm, &[0, 1, 2]), 13.0);
    }

    #[test]
    fn test_tour_cost_trivial() {
        let dm = DistanceMatrix::new(1);
        assert_eq!(tour_cost(&dm, &[]), 0.0);
        assert_eq!(tour_cost(&dm, &[0]), 0.0);
    }

    #[test]
    fn test_infeasible() {
        let t = Tour::infeasible();
        assert!(!t.is_feasible());
        assert!(t.is_empty());
    }
}
