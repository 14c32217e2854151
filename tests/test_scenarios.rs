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

//! End-to-end checks: instances go through the text parser, the solver, and
//! the presentation formatting, exactly the way the binary drives them.

use std::io::Cursor;

use riskroute::*;

/// Parses the given instance text, solves it, and renders the expected cost
/// of the source with two decimals (or the word `unreachable`).
fn solve_text(text: &str) -> String {
    let inst = read_instance(Cursor::new(text)).expect("instance must parse");
    let mut solver = ValueIteration::new(&inst.graph, inst.destination);
    solver.solve().expect("instance must converge");
    format!("{:.2}", solver.expected_cost(inst.source))
}

#[test]
fn one_reliable_edge_costs_its_face_value() {
    assert_eq!("5.00", solve_text("2 1\n0 1 5 0\n0 1\n"));
}

#[test]
fn one_coin_flip_edge_costs_twice_its_face_value() {
    assert_eq!("10.00", solve_text("2 1\n0 1 5 0.5\n0 1\n"));
}

#[test]
fn source_equal_to_destination_costs_nothing() {
    assert_eq!("0.00", solve_text("1 0\n0 0\n"));
}

#[test]
fn parallel_edges_are_arbitrated_on_expectation_not_face_value() {
    // the cheap edge fails 80% of the time (expectation 10), the expensive
    // one never fails (expectation 3)
    let text = "2 2\n0 1 2 0.8\n0 1 3 0\n0 1\n";
    assert_eq!("3.00", solve_text(text));
}

#[test]
fn an_unreachable_source_is_reported_as_such() {
    // node 0 has no outgoing edge at all
    assert_eq!("unreachable", solve_text("2 1\n1 0 1 0\n0 1\n"));
}

#[test]
fn a_certain_failure_trap_is_reported_unreachable() {
    // the only way out of the source fails with certainty
    assert_eq!("unreachable", solve_text("2 1\n0 1 1 1\n0 1\n"));
}

#[test]
fn with_no_failure_at_all_the_answer_is_the_classic_shortest_path() {
    // 0 -> 1 -> 2 (1 + 2 = 3) beats the direct 0 -> 2 (4)
    let text = "3 3\n0 1 1 0\n1 2 2 0\n0 2 4 0\n0 2\n";
    assert_eq!("3.00", solve_text(text));
}

#[test]
fn the_destination_stays_pinned_to_zero_even_with_outgoing_edges() {
    let text = "2 2\n0 1 1 0.5\n1 0 9 0.5\n1 1\n";
    assert_eq!("0.00", solve_text(text));
}

/// The graph used by the fixed-point related checks below: nodes 0 and 1
/// point at each other with coin-flip edges and each has a reliable escape
/// towards the destination 2. The fixed point is E[1] = 10 and E[0] = 12.
fn fallible_cycle() -> Graph {
    let mut graph = Graph::new(3);
    graph.add_edge(Node(0), Node(1), 1.0, 0.5).unwrap();
    graph.add_edge(Node(1), Node(0), 1.0, 0.5).unwrap();
    graph.add_edge(Node(1), Node(2), 10.0, 0.0).unwrap();
    graph.add_edge(Node(0), Node(2), 20.0, 0.0).unwrap();
    graph
}

#[test]
fn estimates_decrease_monotonically_towards_the_fixed_point() {
    // solving the same instance under ever larger sweep budgets exposes the
    // successive partial estimates: each must improve on the previous one
    let graph = fallible_cycle();
    let ordering = Ascending;

    let mut estimates = vec![];
    for budget in 1..=6 {
        let cutoff = SweepBudget::new(budget);
        let mut solver = ValueIteration::custom(&graph, Node(2), 1e-8, &ordering, &cutoff);
        assert!(matches!(solver.solve(), Err(SolveError::NonConvergence { .. })));
        estimates.push(solver.expected_cost(Node(0)).value().unwrap());
    }
    for pair in estimates.windows(2) {
        assert!(pair[1] <= pair[0] + 1e-12);
    }
    // and every partial estimate stays above the fixed point
    for estimate in estimates {
        assert!(estimate >= 12.0 - 1e-6);
    }
}

#[test]
fn the_sweep_order_does_not_change_the_fixed_point() {
    let graph = fallible_cycle();
    let cutoff = SweepBudget::default();

    let ascending = Ascending;
    let mut forward = ValueIteration::custom(&graph, Node(2), 1e-8, &ascending, &cutoff);
    forward.solve().unwrap();

    let descending = Descending;
    let mut backward = ValueIteration::custom(&graph, Node(2), 1e-8, &descending, &cutoff);
    backward.solve().unwrap();

    for node in 0..graph.nb_nodes() {
        let a = forward.expected_cost(Node(node)).value().unwrap();
        let b = backward.expected_cost(Node(node)).value().unwrap();
        assert!((a - b).abs() < 1e-6, "node {node}: {a} vs {b}");
    }
}

#[test]
fn a_too_small_budget_surfaces_as_non_convergence_not_as_a_wrong_answer() {
    let graph = fallible_cycle();
    let ordering = Ascending;
    let cutoff = SweepBudget::new(2);
    let mut solver = ValueIteration::custom(&graph, Node(2), 1e-8, &ordering, &cutoff);
    match solver.solve() {
        Err(SolveError::NonConvergence { sweeps, residual }) => {
            assert_eq!(2, sweeps);
            assert!(residual > 1e-8);
        }
        other => panic!("expected non convergence, got {other:?}"),
    }
}

#[test]
fn malformed_instances_never_reach_the_solver() {
    // probability out of range
    assert!(matches!(
        read_instance(Cursor::new("2 1\n0 1 5 1.5\n0 1\n")),
        Err(InstanceError::Graph(GraphError::InvalidProbability(_)))
    ));
    // negative cost
    assert!(matches!(
        read_instance(Cursor::new("2 1\n0 1 -5 0.5\n0 1\n")),
        Err(InstanceError::Graph(GraphError::NegativeCost(_)))
    ));
    // edge endpoint out of range
    assert!(matches!(
        read_instance(Cursor::new("2 1\n0 9 5 0.5\n0 1\n")),
        Err(InstanceError::Graph(GraphError::UnknownNode { .. }))
    ));
    // negative node count
    assert!(matches!(
        read_instance(Cursor::new("-2 1\n0 1 5 0.5\n0 1\n")),
        Err(InstanceError::ParseInt(_))
    ));
}
