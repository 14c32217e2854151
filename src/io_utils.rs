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

//! This module contains everything that is necessary to parse an unreliable
//! network instance and turn it into structs usable in Rust. The expected
//! text format is whitespace tolerant and skips `#` comment lines:
//!
//! ```plain
//! N M
//! u v cost failProb     <- M such lines, one per directed edge
//! source destination
//! ```

use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    num::{ParseFloatError, ParseIntError},
    path::Path,
};

use crate::{Graph, GraphError, Node};

/// This enumeration simply groups the kinds of errors that might occur when
/// parsing an instance. There can be io errors (file unavailable ?), format
/// errors (e.g. the file is truncated or is not an instance at all), number
/// parsing errors, or edge descriptions the graph itself rejects.
#[derive(Debug, thiserror::Error)]
pub enum InstanceError {
    /// There was an io related error
    #[error("io error {0}")]
    Io(#[from] std::io::Error),
    /// The parser expected to read an integer but got something else
    #[error("parse int {0}")]
    ParseInt(#[from] ParseIntError),
    /// The parser expected to read a real number but got something else
    #[error("parse float {0}")]
    ParseFloat(#[from] ParseFloatError),
    /// The file was not properly formatted (most likely truncated)
    #[error("ill formed instance")]
    Format,
    /// One of the edge descriptions is unacceptable
    #[error("invalid edge: {0}")]
    Graph(#[from] GraphError),
}

/// One complete problem description: the network plus the queried endpoints.
#[derive(Debug, Clone)]
pub struct Instance {
    /// The network to route across
    pub graph: Graph,
    /// Where the traveler starts
    pub source: Node,
    /// Where the traveler wants to go
    pub destination: Node,
}

/// Reads an instance from the given file. Returns either the instance if
/// everything went on well or an error describing the problem.
pub fn read_instance_from_file<P: AsRef<Path>>(fname: P) -> Result<Instance, InstanceError> {
    read_instance(File::open(fname)?)
}

/// Reads an instance from any input stream (a file, stdin, an in-memory
/// buffer when testing).
pub fn read_instance<R: Read>(input: R) -> Result<Instance, InstanceError> {
    let mut tokens = vec![];
    for line in BufReader::new(input).lines() {
        let line = line?;
        let line = line.trim();
        // skip comment lines
        if line.starts_with('#') || line.is_empty() {
            continue;
        }
        tokens.extend(line.split_whitespace().map(String::from));
    }
    let mut tokens = tokens.iter().map(String::as_str);

    let nb_nodes = next_usize(&mut tokens)?;
    let nb_edges = next_usize(&mut tokens)?;

    let mut graph = Graph::new(nb_nodes);
    for _ in 0..nb_edges {
        let from = next_usize(&mut tokens)?;
        let to = next_usize(&mut tokens)?;
        let cost = next_f64(&mut tokens)?;
        let failure = next_f64(&mut tokens)?;
        graph.add_edge(Node(from), Node(to), cost, failure)?;
    }

    let source = next_usize(&mut tokens)?;
    let destination = next_usize(&mut tokens)?;
    for node in [source, destination] {
        if node >= nb_nodes {
            return Err(GraphError::UnknownNode { node, nb_nodes }.into());
        }
    }

    Ok(Instance { graph, source: Node(source), destination: Node(destination) })
}

fn next_usize<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Result<usize, InstanceError> {
    Ok(tokens.next().ok_or(InstanceError::Format)?.parse()?)
}
fn next_f64<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Result<f64, InstanceError> {
    Ok(tokens.next().ok_or(InstanceError::Format)?.parse()?)
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_read_instance {
    use std::io::Cursor;

    use crate::{read_instance, InstanceError, Node};

    #[test]
    fn a_well_formed_instance_is_accepted() {
        let text = "\
            # a two node instance with one coin flip link\n\
            2 1\n\
            0 1 5.0 0.5\n\
            0 1\n";
        let inst = read_instance(Cursor::new(text)).unwrap();
        assert_eq!(2, inst.graph.nb_nodes());
        assert_eq!(1, inst.graph.nb_edges());
        assert_eq!(Node(0), inst.source);
        assert_eq!(Node(1), inst.destination);
    }
    #[test]
    fn tokens_may_spread_over_lines_arbitrarily() {
        let text = "2 1 0 1\n5.0 0.5 0 1";
        let inst = read_instance(Cursor::new(text)).unwrap();
        assert_eq!(1, inst.graph.nb_edges());
    }
    #[test]
    fn a_truncated_instance_is_rejected() {
        let text = "2 1\n0 1 5.0\n";
        assert!(matches!(
            read_instance(Cursor::new(text)),
            Err(InstanceError::Format)
        ));
    }
    #[test]
    fn garbage_where_a_number_is_expected_is_rejected() {
        let text = "two 1\n0 1 5.0 0.5\n0 1\n";
        assert!(matches!(
            read_instance(Cursor::new(text)),
            Err(InstanceError::ParseInt(_))
        ));
    }
    #[test]
    fn an_out_of_range_probability_is_rejected() {
        let text = "2 1\n0 1 5.0 1.5\n0 1\n";
        assert!(matches!(
            read_instance(Cursor::new(text)),
            Err(InstanceError::Graph(_))
        ));
    }
    #[test]
    fn out_of_range_endpoints_are_rejected() {
        let text = "2 1\n0 1 5.0 0.5\n0 7\n";
        assert!(matches!(
            read_instance(Cursor::new(text)),
            Err(InstanceError::Graph(_))
        ));
    }
}
