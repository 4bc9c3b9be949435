//! Per-attempt visitation state.

/// Index-keyed visited flags for one search attempt over a graph.
///
/// Keeping the flags outside the nodes means a graph can be shared
/// immutably while each attempt owns its own state.
///
/// # Examples
///
/// ```
/// use u_coverage::graph::VisitState;
///
/// let mut state = VisitState::new(3);
/// state.mark(1);
/// assert!(state.is_visited(1));
/// assert_eq!(state.count(), 1);
///
/// state.reset();
/// assert_eq!(state.count(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitState {
    visited: Vec<bool>,
}

impl VisitState {
    /// Creates state for `len` nodes, all unvisited.
    pub fn new(len: usize) -> Self {
        Self {
            visited: vec![false; len],
        }
    }

    /// Marks `node` visited.
    ///
    /// # Panics
    ///
    /// Panics if `node` is out of bounds.
    pub fn mark(&mut self, node: usize) {
        self.visited[node] = true;
    }

    /// Returns `true` if `node` has been visited. Out-of-range nodes are
    /// reported unvisited.
    pub fn is_visited(&self, node: usize) -> bool {
        self.visited.get(node).copied().unwrap_or(false)
    }

    /// Clears every flag.
    pub fn reset(&mut self) {
        self.visited.fill(false);
    }

    /// Number of visited nodes.
    pub fn count(&self) -> usize {
        self.visited.iter().filter(|&&v| v).count()
    }

    /// Returns `true` if every node has been visited.
    pub fn all_visited(&self) -> bool {
        self.visited.iter().all(|&v| v)
    }

    /// Number of tracked nodes.
    pub fn len(&self) -> usize {
        self.visited.len()
    }

    /// Returns `true` if no nodes are tracked.
    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }
}
