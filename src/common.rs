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

//! This module defines the most basic data types that are used throughout all
//! the code of our library (both at the abstraction and implementation levels).
//! These are also the types your client code is likely to work with.

use std::fmt::{self, Display};

// ----------------------------------------------------------------------------
// --- NODE -------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// This type denotes a node from the network at hand. Each node is assumed
/// to be identified with an integer ranging from 0 until `graph.nb_nodes()`
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Node(pub usize);
impl Node {
    #[inline]
    /// This function returns the id (numeric value) of the node.
    ///
    /// # Examples:
    /// ```
    /// # use riskroute::Node;
    /// assert_eq!(0, Node(0).id());
    /// assert_eq!(1, Node(1).id());
    /// assert_eq!(2, Node(2).id());
    /// ```
    pub fn id(self) -> usize {
        self.0
    }
}
impl Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ----------------------------------------------------------------------------
// --- EDGE -------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// This denotes one directed link of the network. It is owned by the adjacency
/// list of its origin node and records the node it leads `to`, the `cost` that
/// is charged for an attempted traversal, and the probability (`failure`) that
/// the attempt fails and leaves the traveler at the origin node. Several
/// parallel edges may connect the same pair of nodes: each one is a distinct
/// alternative action.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Edge {
    /// The node this edge leads to when the traversal succeeds
    pub to: Node,
    /// The cost charged for every traversal attempt (non negative)
    pub cost: f64,
    /// The probability, in [0, 1], that a traversal attempt fails
    pub failure: f64,
}

// ----------------------------------------------------------------------------
// --- EXPECTED COST ------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The expected cost of reaching the destination from some node, as computed
/// by a solver. A node with no chain of possibly-successful traversals towards
/// the destination is `Unreachable`; this tag is how the solver's internal
/// "no finite bound yet" sentinel crosses the presentation boundary -- it is
/// never leaked as a very large literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExpectedCost {
    /// A finite expected cost was established for this node
    Finite(f64),
    /// No finite expected cost exists for this node
    Unreachable,
}
impl ExpectedCost {
    /// Returns true iff a finite expected cost was established.
    pub fn is_finite(self) -> bool {
        matches!(self, ExpectedCost::Finite(_))
    }
    /// Returns the finite expected cost if there is one.
    ///
    /// # Examples:
    /// ```
    /// # use riskroute::ExpectedCost;
    /// assert_eq!(Some(5.0), ExpectedCost::Finite(5.0).value());
    /// assert_eq!(None,      ExpectedCost::Unreachable.value());
    /// ```
    pub fn value(self) -> Option<f64> {
        match self {
            ExpectedCost::Finite(v) => Some(v),
            ExpectedCost::Unreachable => None,
        }
    }
}
impl Display for ExpectedCost {
    /// A finite cost renders as the underlying float (honoring the precision
    /// of the formatter, e.g. `{:.2}`); an unreachable node renders as the
    /// text `unreachable`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpectedCost::Finite(v) => Display::fmt(v, f),
            ExpectedCost::Unreachable => f.write_str("unreachable"),
        }
    }
}

// ----------------------------------------------------------------------------
// --- Results ----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The outcome of a solve that reached its fixed point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Convergence {
    /// How many full sweeps over the nodes were performed
    pub sweeps: usize,
    /// The maximum per-node change observed during the last sweep
    pub residual: f64,
}

/// This enumeration groups the kinds of failures a solve can run into. Note
/// that an unreachable source is *not* a failure: it is the perfectly valid
/// `ExpectedCost::Unreachable` answer of a converged solve.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum SolveError {
    /// The requested node does not belong to the graph
    #[error("node {node} is out of range (the graph has {nb_nodes} nodes)")]
    UnknownNode { node: usize, nb_nodes: usize },
    /// The iteration budget was exhausted before a fixed point was reached
    #[error("no fixed point reached after {sweeps} sweeps (residual {residual:e})")]
    NonConvergence { sweeps: usize, residual: f64 },
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_node {
    use crate::Node;

    #[test]
    fn test_node_id() {
        assert_eq!(0, Node(0).id());
        assert_eq!(1, Node(1).id());
        assert_eq!(2, Node(2).id());
        assert_eq!(3, Node(3).id());
    }
}

#[cfg(test)]
mod test_expected_cost {
    use crate::ExpectedCost;

    #[test]
    fn finite_costs_know_their_value() {
        assert!(ExpectedCost::Finite(0.0).is_finite());
        assert_eq!(Some(12.5), ExpectedCost::Finite(12.5).value());
    }
    #[test]
    fn unreachable_has_no_value() {
        assert!(!ExpectedCost::Unreachable.is_finite());
        assert_eq!(None, ExpectedCost::Unreachable.value());
    }
    #[test]
    fn display_honors_the_requested_precision() {
        assert_eq!("10.00", format!("{:.2}", ExpectedCost::Finite(10.0)));
        assert_eq!("unreachable", format!("{:.2}", ExpectedCost::Unreachable));
    }
}
