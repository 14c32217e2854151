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

//! This is the main entry point of the program. This is what gets compiled to
//! the riskroute binary.

use std::time::Duration;

use clap::Parser;
use riskroute::{
    read_instance, read_instance_from_file, Ascending, Cutoff, ExpectedCost, InstanceError,
    SolveError, Solver, SweepBudget, TimeBudget, ValueIteration,
};

/// riskroute computes the minimum expected cost of traveling from a source
/// node to a destination node across a directed network whose links may fail.
/// The expected cost of the source is printed with two decimals, or the word
/// `unreachable` when no chain of possibly-successful traversals exists.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The path to the instance that needs to be solved (stdin when omitted).
    instance: Option<String>,
    /// The convergence tolerance: a full sweep moving no node by more than
    /// this amount terminates the iteration.
    #[clap(short, long, default_value_t = ValueIteration::DEFAULT_TOLERANCE)]
    tolerance: f64,
    /// How many sweeps may the solver perform before giving up ?
    #[clap(short, long, default_value_t = SweepBudget::DEFAULT_BUDGET)]
    sweeps: usize,
    /// How long do you want the solver to keep working on your problem ?
    /// (in seconds; overrides --sweeps when given)
    #[clap(short, long)]
    duration: Option<u64>,
}

#[derive(Debug, thiserror::Error)]
enum Error {
    #[error(transparent)]
    Instance(#[from] InstanceError),
    #[error(transparent)]
    Solve(#[from] SolveError),
}

fn main() {
    let args = Args::parse();
    match run(&args) {
        Ok(answer) => println!("{answer:.2}"),
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<ExpectedCost, Error> {
    let instance = match &args.instance {
        Some(fname) => read_instance_from_file(fname)?,
        None => read_instance(std::io::stdin())?,
    };

    let ordering = Ascending;
    let sweep_budget = SweepBudget::new(args.sweeps);
    let time_budget = args.duration.map(|secs| TimeBudget::new(Duration::from_secs(secs)));
    let cutoff: &dyn Cutoff = match &time_budget {
        Some(budget) => budget,
        None => &sweep_budget,
    };

    let mut solver = ValueIteration::custom(
        &instance.graph,
        instance.destination,
        args.tolerance,
        &ordering,
        cutoff,
    );
    solver.solve()?;
    Ok(solver.expected_cost(instance.source))
}
