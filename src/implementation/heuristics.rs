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

//! This module provides the implementation of the stock sweep orderings and
//! of the various cutoffs that can be used to tune the behavior of the value
//! iteration solver.

use std::{sync::{Arc, atomic::AtomicBool}, time::Duration};

use crate::{Cutoff, Node, SweepOrdering};

// ----------------------------------------------------------------------------
// --- SWEEP ORDERINGS ----------------------------------------------------------
// ----------------------------------------------------------------------------
/// _This is the default sweep ordering._ Nodes are visited by ascending
/// index, which is the order of the reference behavior.
#[derive(Debug, Default, Copy, Clone)]
pub struct Ascending;
impl SweepOrdering for Ascending {
    fn sweep(&self, nb_nodes: usize) -> Vec<Node> {
        (0..nb_nodes).map(Node).collect()
    }
}

/// Visits the nodes by descending index. When the fixed point is unique (the
/// only situation this crate caters for) this converges to the same values as
/// `Ascending`, possibly in a different number of sweeps.
#[derive(Debug, Default, Copy, Clone)]
pub struct Descending;
impl SweepOrdering for Descending {
    fn sweep(&self, nb_nodes: usize) -> Vec<Node> {
        (0..nb_nodes).rev().map(Node).collect()
    }
}

// ----------------------------------------------------------------------------
// --- CUTOFFS ------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// This cutoff never fires: the solver keeps sweeping until it converges. Use
/// it only when you know the instance is well posed (no certain-failure trap
/// the solver could chase forever).
#[derive(Debug, Default, Copy, Clone)]
pub struct NoCutoff;
impl Cutoff for NoCutoff {
    fn must_stop(&self, _nb_sweeps: usize) -> bool {
        false
    }
}

/// _This is the default cutoff._ It imposes a hard ceiling on the number of
/// sweeps the solver may perform before it reports `NonConvergence`. This is
/// what turns "never converges" into an observable failure rather than an
/// infinite loop.
#[derive(Debug, Copy, Clone)]
pub struct SweepBudget {
    nb_sweeps: usize,
}
impl SweepBudget {
    /// The ceiling used by `SweepBudget::default()` and by the solvers built
    /// with `ValueIteration::new`.
    pub const DEFAULT_BUDGET: usize = 10_000;

    pub const fn new(nb_sweeps: usize) -> Self {
        SweepBudget { nb_sweeps }
    }
}
impl Default for SweepBudget {
    fn default() -> Self {
        SweepBudget::new(Self::DEFAULT_BUDGET)
    }
}
impl Cutoff for SweepBudget {
    fn must_stop(&self, nb_sweeps: usize) -> bool {
        nb_sweeps >= self.nb_sweeps
    }
}

/// This cutoff allows one to specify a maximum wall-clock budget to solve the
/// problem. Once the time budget is elapsed, the solver stops at the end of
/// the current sweep and reports `NonConvergence`.
///
/// # Example
/// ```
/// # use riskroute::*;
/// use std::time::Duration;
///
/// let mut graph = Graph::new(2);
/// graph.add_edge(Node(0), Node(1), 5.0, 0.5).unwrap();
///
/// let ordering = Ascending;
/// let cutoff = TimeBudget::new(Duration::from_secs(10));
/// let mut solver = ValueIteration::custom(&graph, Node(1), 1e-8, &ordering, &cutoff);
/// let outcome = solver.solve(); // will run for at most 10 seconds
/// # assert!(outcome.is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct TimeBudget {
    stop: Arc<AtomicBool>,
}
impl TimeBudget {
    pub fn new(budget: Duration) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let t_flag = Arc::clone(&stop);

        // timer
        std::thread::spawn(move || {
            std::thread::sleep(budget);
            t_flag.store(true, std::sync::atomic::Ordering::Relaxed);
        });

        TimeBudget { stop }
    }
}
impl Cutoff for TimeBudget {
    fn must_stop(&self, _nb_sweeps: usize) -> bool {
        self.stop.load(std::sync::atomic::Ordering::Relaxed)
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################


#[cfg(test)]
mod test_cutoffs {
    use std::time::Duration;

    use crate::{Cutoff, NoCutoff, SweepBudget, TimeBudget};

    #[test]
    fn no_cutoff_never_fires() {
        assert!(!NoCutoff.must_stop(0));
        assert!(!NoCutoff.must_stop(usize::MAX));
    }
    #[test]
    fn sweep_budget_fires_once_the_budget_is_spent() {
        let cutoff = SweepBudget::new(3);
        assert!(!cutoff.must_stop(2));
        assert!(cutoff.must_stop(3));
        assert!(cutoff.must_stop(4));
    }
    #[test]
    fn time_budget_fires_once_the_budget_is_spent() {
        let cutoff = TimeBudget::new(Duration::from_millis(30));
        assert!(!cutoff.must_stop(0));
        std::thread::sleep(Duration::from_millis(100));
        assert!(cutoff.must_stop(0));
    }
}
