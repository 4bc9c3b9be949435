//! Node and edge types.

use serde::{Deserialize, Serialize};

/// A cell in the adjacency graph.
///
/// Carries an arbitrary payload (`load`) and the indices of its incident
/// edges, in insertion order.
///
/// # Examples
///
/// ```
/// use u_coverage::graph::Graph;
///
/// let mut graph = Graph::new();
/// let a = graph.add_node("north");
/// let b = graph.add_node("south");
/// let e = graph.add_unit_edge(a, b).unwrap();
///
/// assert_eq!(*graph.node(a).unwrap().load(), "north");
/// assert_eq!(graph.node(a).unwrap().edges(), &[e]);
/// assert_eq!(graph.node(b).unwrap().degree(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node<L> {
    load: L,
    edges: Vec<usize>,
}

impl<L> Node<L> {
    pub(crate) fn new(load: L) -> Self {
        Self {
            load,
            edges: Vec::new(),
        }
    }

    /// The payload this node was created with.
    pub fn load(&self) -> &L {
        &self.load
    }

    /// Indices of incident edges.
    pub fn edges(&self) -> &[usize] {
        &self.edges
    }

    /// Number of incident edges (parallel edges counted separately).
    pub fn degree(&self) -> usize {
        self.edges.len()
    }

    pub(crate) fn attach(&mut self, edge: usize) {
        self.edges.push(edge);
    }
}

/// An undirected, weighted connection between two distinct nodes.
///
/// `node_a` and `node_b` are interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    node_a: usize,
    node_b: usize,
    weight: f64,
}

impl Edge {
    pub(crate) fn new(node_a: usize, node_b: usize, weight: f64) -> Self {
        Self {
            node_a,
            node_b,
            weight,
        }
    }

    /// First endpoint.
    pub fn node_a(&self) -> usize {
        self.node_a
    }

    /// Second endpoint.
    pub fn node_b(&self) -> usize {
        self.node_b
    }

    /// Traversal cost.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns `true` if `node` is one of the two endpoints.
    pub fn touches(&self, node: usize) -> bool {
        self.node_a == node || self.node_b == node
    }

    /// Returns the endpoint opposite `node`, or `None` if `node` is not an
    /// endpoint.
    pub fn other(&self, node: usize) -> Option<usize> {
        if self.node_a == node {
            Some(self.node_b)
        } else if self.node_b == node {
            Some(self.node_a)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_other() {
        let e = Edge::new(3, 7, 1.5);
        assert_eq!(e.other(3), Some(7));
        assert_eq!(e.other(7), Some(3));
        assert_eq!(e.other(5), None);
    }

    #[test]
    fn test_edge_touches() {
        let e = Edge::new(0, 1, 1.0);
        assert!(e.touches(0));
        assert!(e.touches(1));
        assert!(!e.touches(2));
        assert_eq!(e.weight(), 1.0);
    }

    #[test]
    fn test_node_attach_keeps_order() {
        let mut n = Node::new(());
        n.attach(4);
        n.attach(2);
        assert_eq!(n.edges(), &[4, 2]);
        assert_eq!(n.degree(), 2);
    }
}
