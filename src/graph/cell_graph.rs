//! Arena-backed undirected graph.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::{Edge, Node};
use crate::error::{PlanError, Result};

/// An undirected multigraph of cells.
///
/// Node indices are assigned in insertion order starting at 0, and are the
/// indices used by [`DistanceMatrix`](crate::distance::DistanceMatrix) and
/// the planners. Parallel edges between the same pair of nodes are allowed.
///
/// # Examples
///
/// ```
/// use u_coverage::graph::Graph;
///
/// let mut graph = Graph::new();
/// let a = graph.add_node('A');
/// let b = graph.add_node('B');
/// let c = graph.add_node('C');
/// let ab = graph.add_edge(a, b, 2.0).unwrap();
/// graph.add_edge(b, c, 3.0).unwrap();
///
/// assert_eq!(graph.neighbor_of(a, ab).unwrap(), b);
/// assert!(graph.neighbor_of(c, ab).is_err());
/// assert!(graph.is_connected());
/// ```
///
/// Deserialized graphs are checked with [`Graph::validate`], so malformed
/// input is rejected at the boundary instead of reaching the planners.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "RawGraph<L>",
    bound(deserialize = "L: Deserialize<'de>")
)]
pub struct Graph<L> {
    nodes: Vec<Node<L>>,
    edges: Vec<Edge>,
}

/// Unchecked wire form of [`Graph`].
#[derive(Deserialize)]
struct RawGraph<L> {
    nodes: Vec<Node<L>>,
    edges: Vec<Edge>,
}

impl<L> TryFrom<RawGraph<L>> for Graph<L> {
    type Error = PlanError;

    fn try_from(raw: RawGraph<L>) -> Result<Self> {
        let graph = Self {
            nodes: raw.nodes,
            edges: raw.edges,
        };
        graph.validate()?;
        Ok(graph)
    }
}

impl<L> Default for Graph<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L> Graph<L> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Builds a graph from node payloads and `(a, b, weight)` triples.
    ///
    /// Edges are inserted in the order given, which fixes the incident
    /// edge order of every node.
    pub fn from_edges(
        loads: impl IntoIterator<Item = L>,
        edges: &[(usize, usize, f64)],
    ) -> Result<Self> {
        let mut graph = Self::new();
        for load in loads {
            graph.add_node(load);
        }
        for &(a, b, weight) in edges {
            graph.add_edge(a, b, weight)?;
        }
        Ok(graph)
    }

    /// Adds a node and returns its index.
    pub fn add_node(&mut self, load: L) -> usize {
        self.nodes.push(Node::new(load));
        self.nodes.len() - 1
    }

    /// Adds an edge between two distinct existing nodes and returns its index.
    ///
    /// # Errors
    ///
    /// - [`PlanError::UnknownNode`] if either endpoint is not in the graph
    /// - [`PlanError::SelfLoop`] if `a == b`
    /// - [`PlanError::InvalidWeight`] if `weight` is negative or NaN
    pub fn add_edge(&mut self, a: usize, b: usize, weight: f64) -> Result<usize> {
        self.check_node(a)?;
        self.check_node(b)?;
        if a == b {
            return Err(PlanError::SelfLoop { node: a });
        }
        if weight.is_nan() || weight < 0.0 {
            return Err(PlanError::InvalidWeight(weight));
        }

        let id = self.edges.len();
        self.edges.push(Edge::new(a, b, weight));
        self.nodes[a].attach(id);
        self.nodes[b].attach(id);
        Ok(id)
    }

    /// Adds an edge of weight 1, the cost of crossing into an adjacent cell.
    pub fn add_unit_edge(&mut self, a: usize, b: usize) -> Result<usize> {
        self.add_edge(a, b, 1.0)
    }

    /// Returns the node at `index`.
    pub fn node(&self, index: usize) -> Option<&Node<L>> {
        self.nodes.get(index)
    }

    /// Returns the edge at `index`.
    pub fn edge(&self, index: usize) -> Option<&Edge> {
        self.edges.get(index)
    }

    /// All nodes in index order.
    pub fn nodes(&self) -> &[Node<L>] {
        &self.nodes
    }

    /// All edges in index order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the endpoint of `edge` that is not `node`.
    ///
    /// # Errors
    ///
    /// - [`PlanError::UnknownEdge`] if `edge` is not in the graph
    /// - [`PlanError::NotIncident`] if `node` is not an endpoint of `edge`
    pub fn neighbor_of(&self, node: usize, edge: usize) -> Result<usize> {
        let e = self.edges.get(edge).ok_or(PlanError::UnknownEdge {
            edge,
            len: self.edges.len(),
        })?;
        e.other(node).ok_or(PlanError::NotIncident { node, edge })
    }

    /// Returns `true` if some edge joins `a` and `b`.
    pub fn are_adjacent(&self, a: usize, b: usize) -> bool {
        self.nodes.get(a).is_some_and(|node| {
            node.edges()
                .iter()
                .any(|&e| self.edges.get(e).and_then(|edge| edge.other(a)) == Some(b))
        })
    }

    /// Counts the nodes reachable from `start`, `start` included.
    pub fn reachable_from(&self, start: usize) -> Result<usize> {
        self.check_node(start)?;

        let mut seen = vec![false; self.nodes.len()];
        let mut queue = VecDeque::from([start]);
        seen[start] = true;
        let mut count = 0;

        while let Some(current) = queue.pop_front() {
            count += 1;
            for &e in self.nodes[current].edges() {
                let Some(next) = self.edges.get(e).and_then(|edge| edge.other(current)) else {
                    continue;
                };
                if let Some(s) = seen.get_mut(next) {
                    if !*s {
                        *s = true;
                        queue.push_back(next);
                    }
                }
            }
        }
        Ok(count)
    }

    /// Returns `true` if every node is reachable from every other.
    ///
    /// The empty graph is considered connected.
    pub fn is_connected(&self) -> bool {
        match self.reachable_from(0) {
            Ok(count) => count == self.nodes.len(),
            Err(_) => self.nodes.is_empty(),
        }
    }

    /// Checks the structural invariants: every edge joins two distinct
    /// nodes of this graph with a non-negative weight, and is listed by both
    /// endpoints.
    ///
    /// Graphs built through [`add_edge`](Self::add_edge) always pass; this is
    /// meant for graphs received through deserialization.
    pub fn validate(&self) -> Result<()> {
        for (id, edge) in self.edges.iter().enumerate() {
            let (a, b) = (edge.node_a(), edge.node_b());
            self.check_node(a)?;
            self.check_node(b)?;
            if a == b {
                return Err(PlanError::SelfLoop { node: a });
            }
            if edge.weight().is_nan() || edge.weight() < 0.0 {
                return Err(PlanError::InvalidWeight(edge.weight()));
            }
            for endpoint in [a, b] {
                if !self.nodes[endpoint].edges().contains(&id) {
                    return Err(PlanError::NotIncident {
                        node: endpoint,
                        edge: id,
                    });
                }
            }
        }
        for (id, node) in self.nodes.iter().enumerate() {
            for &e in node.edges() {
                let edge = self.edges.get(e).ok_or(PlanError::UnknownEdge {
                    edge: e,
                    len: self.edges.len(),
                })?;
                if !edge.touches(id) {
                    return Err(PlanError::NotIncident { node: id, edge: e });
                }
            }
        }
        Ok(())
    }

    /// Appends an edge without any checks, attaching it to whichever
    /// endpoints exist.
    #[cfg(test)]
    pub(crate) fn push_unchecked_edge(&mut self, a: usize, b: usize, weight: f64) -> usize {
        let id = self.edges.len();
        self.edges.push(Edge::new(a, b, weight));
        for endpoint in [a, b] {
            if let Some(node) = self.nodes.get_mut(endpoint) {
                node.attach(id);
            }
        }
        id
    }

    fn check_node(&self, node: usize) -> Result<()> {
        if node < self.nodes.len() {
            Ok(())
        } else {
            Err(PlanError::UnknownNode {
                node,
                len: self.nodes.len(),
            })
        }
    }
}
