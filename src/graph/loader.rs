//! Reads weighted graphs from plain text.
//!
//! The format is a vertex count followed by one `source destination weight`
//! triple per line:
//!
//! ```text
//! 4
//! 0 1 1
//! 0 2 4
//! 1 2 2
//! ```
//!
//! Blank lines and lines starting with `#` are ignored.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ordered_float::OrderedFloat;

use crate::graph::{DirectedGraph, Graph, MutableGraph};
use crate::{Error, Result};

/// Loads a graph from a file on disk
pub fn load_graph<P: AsRef<Path>>(path: P) -> Result<DirectedGraph<OrderedFloat<f64>>> {
    let file = File::open(path.as_ref())?;
    let graph = parse_graph(BufReader::new(file))?;
    log::debug!(
        "loaded graph from {}: {} vertices, {} edges",
        path.as_ref().display(),
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Parses a graph from any buffered reader
pub fn parse_graph<R: BufRead>(reader: R) -> Result<DirectedGraph<OrderedFloat<f64>>> {
    let mut graph: Option<DirectedGraph<OrderedFloat<f64>>> = None;

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let tokens: Vec<&str> = trimmed.split_whitespace().collect();
        match graph.as_mut() {
            None => {
                if tokens.len() != 1 {
                    return Err(parse_error(line_no, "expected the vertex count on its own line"));
                }
                let count = parse_token::<usize>(tokens[0], line_no, "vertex count")?;
                graph = Some(DirectedGraph::with_vertices(count));
            }
            Some(graph) => {
                if tokens.len() != 3 {
                    return Err(parse_error(
                        line_no,
                        format!("expected `source destination weight`, found {} fields", tokens.len()),
                    ));
                }
                let from = parse_token::<usize>(tokens[0], line_no, "source")?;
                let to = parse_token::<usize>(tokens[1], line_no, "destination")?;
                let weight = parse_token::<f64>(tokens[2], line_no, "weight")?;

                if !graph.has_vertex(from) || !graph.has_vertex(to) {
                    return Err(Error::InvalidEdge(from, to));
                }
                if weight < 0.0 || weight.is_nan() {
                    return Err(Error::NegativeWeight(weight));
                }
                graph.add_edge(from, to, OrderedFloat(weight));
            }
        }
    }

    graph.ok_or_else(|| parse_error(0, "missing vertex count"))
}

fn parse_token<T: std::str::FromStr>(token: &str, line: usize, what: &str) -> Result<T> {
    token
        .parse()
        .map_err(|_| parse_error(line, format!("invalid {}: {:?}", what, token)))
}

fn parse_error(line: usize, message: impl Into<String>) -> Error {
    Error::Parse {
        line,
        message: message.into(),
    }
}
