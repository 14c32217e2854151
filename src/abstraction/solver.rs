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

//! This module defines the `Solver` trait.

use crate::{Convergence, ExpectedCost, Node, SolveError};

/// This is the solver abstraction. It is implemented by a structure that
/// computes, for every node of a network, the minimum expected cost of
/// reaching some fixed destination node under an optimal routing policy
/// (currently only synchronous Gauss-Seidel value iteration).
pub trait Solver {
    /// This method orders the solver to chase the fixed point of the
    /// expected-cost equations. It either returns a `Convergence` describing
    /// the converged computation, or an error. Three cases are thus to be
    /// distinguished:
    ///
    /// * `Ok(_)`: a fixed point was reached; every node can be queried with
    ///   `expected_cost` and nodes still lacking a finite bound are genuinely
    ///   unreachable.
    /// * `Err(SolveError::NonConvergence{..})`: the configured cutoff fired
    ///   before the residual dropped below the tolerance. The partial (still
    ///   monotonically decreasing) estimates remain queryable but they are
    ///   upper bounds, not final answers.
    /// * `Err(SolveError::UnknownNode{..})`: the destination does not belong
    ///   to the graph; nothing was computed.
    fn solve(&mut self) -> Result<Convergence, SolveError>;

    /// This method returns the expected cost of reaching the destination from
    /// the given node, as established by the last call to `solve`. It returns
    /// `ExpectedCost::Unreachable` for any node without a finite bound --
    /// which is every node but the destination if `solve` was never called.
    fn expected_cost(&self, node: Node) -> ExpectedCost;
}
