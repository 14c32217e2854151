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

//! # RISKROUTE
//! RISKROUTE computes the minimum expected cost of traveling across a
//! directed network whose links may fail. Every edge of the network carries a
//! traversal cost and a probability of failure: an attempted traversal is
//! charged its cost no matter what, but with the given probability the
//! attempt fails and leaves the traveler stranded at the edge's origin node,
//! free to try again or to pick any other outgoing edge. Assuming an optimal
//! routing decision is made at every node, the expected cost of every node
//! towards a destination satisfies a system of mutually recursive equations:
//!
//! ```plain
//! E[destination] = 0
//! E[u]           = min over the outgoing edges e = (u -> t, c, p) of u
//!                  of   c + (1-p) * E[t] + p * E[u]
//! ```
//!
//! The unknown `E[u]` appears on both sides of its own equation (a failed
//! attempt leaves you facing the very cost being computed), which is why the
//! system cannot be solved by a single-pass shortest path algorithm. Instead,
//! the `ValueIteration` solver chases the fixed point of these equations:
//! it repeatedly sweeps all nodes in a deterministic order, each node taking
//! the minimum expected cost across its outgoing edges given the current
//! estimates (including the estimates refreshed earlier in the same sweep),
//! until no value moves by more than a small tolerance.
//!
//! ## Quick Example
//! The following solves the tiniest interesting instance: one link costing 5
//! per attempt and failing half of the time. On average the traveler pays for
//! two attempts, hence an expected cost of 10.
//!
//! ```
//! use riskroute::*;
//!
//! // 1. Describe the network.
//! let mut graph = Graph::new(2);
//! graph.add_edge(Node(0), Node(1), 5.0, 0.5).unwrap();
//!
//! // 2. Create a solver towards the chosen destination and let it converge.
//! //    The outcome tells how many sweeps were needed; the expected cost of
//! //    *every* node is computed at once and can be queried afterwards.
//! let mut solver = ValueIteration::new(&graph, Node(1));
//! let outcome = solver.solve().unwrap();
//! assert!(outcome.sweeps >= 1);
//!
//! // 3. Read off the answer for the node(s) you care about.
//! assert_eq!(ExpectedCost::Finite(10.0), solver.expected_cost(Node(0)));
//! assert_eq!("10.00", format!("{:.2}", solver.expected_cost(Node(0))));
//! ```
//!
//! A node from which no chain of possibly-successful traversals leads to the
//! destination is reported `ExpectedCost::Unreachable` rather than as some
//! huge finite-looking number. And when an ill-posed instance keeps the
//! iteration from settling, the configured `Cutoff` turns the would-be
//! infinite loop into an explicit `SolveError::NonConvergence`.

mod common;
mod abstraction;
mod implementation;
mod io_utils;

pub use common::*;
pub use abstraction::*;
pub use implementation::*;
pub use io_utils::*;
