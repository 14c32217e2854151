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

//! This module provides the value iteration solver, which is the heart of
//! this crate.

use ordered_float::OrderedFloat;

use crate::{
    Ascending, Convergence, Cutoff, Edge, ExpectedCost, Graph, Node, SolveError, Solver,
    SweepBudget, SweepOrdering,
};

/// The sweep ordering used by solvers built with `ValueIteration::new`.
static DEFAULT_ORDERING: Ascending = Ascending;
/// The cutoff used by solvers built with `ValueIteration::new`.
static DEFAULT_CUTOFF: SweepBudget = SweepBudget::new(SweepBudget::DEFAULT_BUDGET);

/// This structure implements a synchronous Gauss-Seidel value iteration over
/// the nodes of a graph whose edges may fail. It computes, for every node at
/// once, the minimum expected cost of reaching a fixed destination node when
/// an optimal routing decision is made at every node.
///
/// The equation being solved for each node `u` other than the destination is
///
/// ```plain
/// E[u] = min over the outgoing edges e = (u -> t, c, p) of u
///        of   c + (1-p) * E[t] + p * E[u]
/// ```
///
/// that is: the traversal cost `c` is charged on every attempt; with
/// probability `1-p` the attempt succeeds and the traveler continues
/// optimally from `t`; with probability `p` it fails and the traveler is back
/// at `u`, still facing the very expected cost `E[u]` being computed. Because
/// the unknown appears on both sides of its own equation, the system is
/// chased as a fixed point rather than computed in one pass: the solver
/// repeatedly sweeps all nodes in a deterministic order, each update seeing
/// the values refreshed earlier in the same sweep, until no value moves by
/// more than the tolerance.
///
/// Every update takes a minimum over alternatives that can only shrink as the
/// neighbors' estimates shrink, so the per-node sequences of estimates are
/// monotonically non-increasing. The value of the destination is pinned to
/// zero and never updated. Nodes for which no finite bound was established
/// when the iteration converges are reported unreachable.
///
/// # Examples:
/// ```
/// # use riskroute::*;
/// // one single link, costing 5 per attempt and failing half of the time:
/// // on average the traveler pays for two attempts.
/// let mut graph = Graph::new(2);
/// graph.add_edge(Node(0), Node(1), 5.0, 0.5).unwrap();
///
/// let mut solver = ValueIteration::new(&graph, Node(1));
/// solver.solve().unwrap();
///
/// assert_eq!(ExpectedCost::Finite(10.0), solver.expected_cost(Node(0)));
/// assert_eq!(ExpectedCost::Finite(0.0),  solver.expected_cost(Node(1)));
/// ```
pub struct ValueIteration<'a> {
    /// The (immutable) graph being solved
    graph: &'a Graph,
    /// The node every expected cost is measured towards
    destination: Node,
    /// A sweep whose maximum per-node change falls below this tolerance
    /// terminates the iteration
    tolerance: f64,
    /// Produces the deterministic node visit order of each sweep
    ordering: &'a dyn SweepOrdering,
    /// Decides when to give up and report non convergence
    cutoff: &'a dyn Cutoff,
    /// The expected-cost estimate of every node; `None` encodes "no finite
    /// bound established yet" and is only ever turned into `Unreachable` at
    /// the query boundary
    costs: Vec<Option<f64>>,
}

impl<'a> ValueIteration<'a> {
    /// The convergence tolerance used by solvers built with
    /// `ValueIteration::new`.
    pub const DEFAULT_TOLERANCE: f64 = 1e-8;

    /// Creates a solver with the default tuning: ascending sweep order,
    /// tolerance of `1e-8` and a budget of `SweepBudget::DEFAULT_BUDGET`
    /// sweeps.
    pub fn new(graph: &'a Graph, destination: Node) -> Self {
        Self::custom(
            graph,
            destination,
            Self::DEFAULT_TOLERANCE,
            &DEFAULT_ORDERING,
            &DEFAULT_CUTOFF,
        )
    }
    /// Creates a solver with full control over the tuning knobs.
    pub fn custom(
        graph: &'a Graph,
        destination: Node,
        tolerance: f64,
        ordering: &'a dyn SweepOrdering,
        cutoff: &'a dyn Cutoff,
    ) -> Self {
        let mut costs = vec![None; graph.nb_nodes()];
        if graph.contains(destination) {
            costs[destination.id()] = Some(0.0);
        }
        ValueIteration { graph, destination, tolerance, ordering, cutoff, costs }
    }

    /// Performs one full sweep over the given node order and returns the
    /// maximum change applied to any node during that sweep. The discovery of
    /// a first finite bound counts as an infinite change so that it always
    /// forces at least one more sweep.
    fn sweep(&mut self, order: &[Node]) -> f64 {
        let mut residual = 0.0_f64;
        for node in order.iter().copied() {
            if node == self.destination {
                continue;
            }
            if let Some(best) = self.best_decision(node) {
                match self.costs[node.id()] {
                    Some(current) if best < current => {
                        residual = residual.max(current - best);
                        self.costs[node.id()] = Some(best);
                    }
                    // an estimate may only ever improve
                    Some(_) => {}
                    None => {
                        residual = f64::INFINITY;
                        self.costs[node.id()] = Some(best);
                    }
                }
            }
        }
        residual
    }

    /// The minimum expected cost achievable from `node` across all of its
    /// outgoing edges, given the current estimates. `None` when no edge can
    /// establish a finite bound (yet).
    fn best_decision(&self, node: Node) -> Option<f64> {
        self.graph
            .edges_of(node)
            .iter()
            .filter_map(|edge| self.expected_edge_cost(node, edge))
            .min_by_key(|&cost| OrderedFloat(cost))
    }

    /// The expected cost of standing at `node` and committing to `edge`,
    /// given the current estimates.
    ///
    /// An edge whose target has no finite bound, or which fails with
    /// certainty, cannot bound its origin. Otherwise, when the origin already
    /// holds a finite estimate `E[u]`, this is the literal self-referential
    /// update `c + (1-p)*E[t] + p*E[u]`. When the origin is still unbounded,
    /// the self-referential term is resolved exactly instead: the unique
    /// fixed point of `x = c + (1-p)*E[t] + p*x` is `c/(1-p) + E[t]`, which
    /// is the value the literal update converges to from any finite starting
    /// estimate. Bootstrapping with that closed form keeps the sentinel an
    /// honest "no value yet" tag while still letting fallible edges establish
    /// a first bound.
    fn expected_edge_cost(&self, node: Node, edge: &Edge) -> Option<f64> {
        let target = self.costs[edge.to.id()]?;
        let success = 1.0 - edge.failure;
        if success <= 0.0 {
            return None;
        }
        match self.costs[node.id()] {
            Some(current) => Some(edge.cost + success * target + edge.failure * current),
            None => Some(edge.cost / success + target),
        }
    }
}

impl Solver for ValueIteration<'_> {
    fn solve(&mut self) -> Result<Convergence, SolveError> {
        if !self.graph.contains(self.destination) {
            return Err(SolveError::UnknownNode {
                node: self.destination.id(),
                nb_nodes: self.graph.nb_nodes(),
            });
        }
        let nb_nodes = self.graph.nb_nodes();
        self.costs = vec![None; nb_nodes];
        self.costs[self.destination.id()] = Some(0.0);

        let order = self.ordering.sweep(nb_nodes);
        let mut nb_sweeps = 0;
        loop {
            let residual = self.sweep(&order);
            nb_sweeps += 1;
            if residual <= self.tolerance {
                return Ok(Convergence { sweeps: nb_sweeps, residual });
            }
            if self.cutoff.must_stop(nb_sweeps) {
                return Err(SolveError::NonConvergence { sweeps: nb_sweeps, residual });
            }
        }
    }

    fn expected_cost(&self, node: Node) -> ExpectedCost {
        self.costs
            .get(node.id())
            .copied()
            .flatten()
            .map_or(ExpectedCost::Unreachable, ExpectedCost::Finite)
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
