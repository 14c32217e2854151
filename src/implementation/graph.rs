// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module provides the adjacency-list representation of the network the
//! solver works on. A graph is built once, validated edge by edge, and never
//! mutated for the duration of a solve.

use crate::{Edge, Node};

/// This enumeration groups the kinds of errors that make an edge description
/// unacceptable. These are all caught when the graph is built: the solver
/// itself never gets to see malformed data.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum GraphError {
    /// One endpoint of the edge is not a node of this graph
    #[error("node {node} is out of range (the graph has {nb_nodes} nodes)")]
    UnknownNode { node: usize, nb_nodes: usize },
    /// The traversal cost is negative (or NaN)
    #[error("edge cost must be a non negative number (got {0})")]
    NegativeCost(f64),
    /// The failure probability does not lie in [0, 1] (or is NaN)
    #[error("failure probability must lie in [0, 1] (got {0})")]
    InvalidProbability(f64),
}

/// The directed graph whose expected traversal costs are being computed.
/// Every edge is owned by the adjacency list of its origin node. Parallel
/// edges between the same pair of nodes are kept as distinct alternatives.
///
/// # Examples:
/// ```
/// # use riskroute::{Graph, Node};
/// let mut graph = Graph::new(3);
/// graph.add_edge(Node(0), Node(1), 5.0, 0.25).unwrap();
/// graph.add_edge(Node(1), Node(2), 2.0, 0.0).unwrap();
///
/// assert_eq!(3, graph.nb_nodes());
/// assert_eq!(2, graph.nb_edges());
/// assert_eq!(1, graph.edges_of(Node(0)).len());
/// assert!(graph.edges_of(Node(2)).is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Graph {
    /// adjacency[u] holds the outgoing edges of node u
    adjacency: Vec<Vec<Edge>>,
}

impl Graph {
    /// Creates a new graph comprising `nb_nodes` nodes (identified by the
    /// indices `0..nb_nodes`) and no edge.
    pub fn new(nb_nodes: usize) -> Self {
        Graph { adjacency: vec![vec![]; nb_nodes] }
    }
    /// The number of nodes of this graph.
    pub fn nb_nodes(&self) -> usize {
        self.adjacency.len()
    }
    /// The total number of edges of this graph.
    pub fn nb_edges(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }
    /// Returns true iff the given node belongs to this graph.
    pub fn contains(&self, node: Node) -> bool {
        node.id() < self.nb_nodes()
    }
    /// The outgoing edges of the given node. Panics if the node does not
    /// belong to the graph (guard with `contains` when the node comes from
    /// an untrusted source).
    pub fn edges_of(&self, node: Node) -> &[Edge] {
        &self.adjacency[node.id()]
    }
    /// Adds one directed edge from `from` to `to`, charging `cost` per
    /// traversal attempt and failing with probability `failure`. The edge is
    /// rejected whenever an endpoint is out of range, the cost is negative
    /// or NaN, or the probability falls outside of [0, 1].
    pub fn add_edge(&mut self, from: Node, to: Node, cost: f64, failure: f64) -> Result<(), GraphError> {
        let nb_nodes = self.nb_nodes();
        if !self.contains(from) {
            return Err(GraphError::UnknownNode { node: from.id(), nb_nodes });
        }
        if !self.contains(to) {
            return Err(GraphError::UnknownNode { node: to.id(), nb_nodes });
        }
        if cost.is_nan() || cost < 0.0 {
            return Err(GraphError::NegativeCost(cost));
        }
        // the range check also rejects NaN
        if !(0.0..=1.0).contains(&failure) {
            return Err(GraphError::InvalidProbability(failure));
        }
        self.adjacency[from.id()].push(Edge { to, cost, failure });
        Ok(())
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
