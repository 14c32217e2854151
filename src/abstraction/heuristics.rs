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

//! This module defines the traits used to tune the behavior of the value
//! iteration loop: the order in which nodes are visited during a sweep, and
//! the criterion deciding that the solver must give up on converging.

use crate::Node;

/// This trait produces the deterministic order in which the nodes of the
/// graph are visited during one sweep of the value iteration loop. The order
/// has no impact on the values at the fixed point (when that fixed point is
/// unique) but it does impact how fast the fixed point is reached, since each
/// update immediately sees the values refreshed earlier in the same sweep.
pub trait SweepOrdering {
    /// Returns the sequence of nodes to visit, given the number of nodes of
    /// the graph. The destination is simply skipped by the solver, so it is
    /// fine (and expected) for this sequence to contain every node.
    fn sweep(&self, nb_nodes: usize) -> Vec<Node>;
}

/// This trait encapsulates the criterion deciding that the solver must stop
/// trying to converge. This is the mechanism that turns a pathological
/// instance (one that would make the naive loop spin forever) into an
/// observable `NonConvergence` failure.
pub trait Cutoff {
    /// Returns true iff the solver must stop chasing the fixed point after
    /// having completed `nb_sweeps` full sweeps.
    fn must_stop(&self, nb_sweeps: usize) -> bool;
}
