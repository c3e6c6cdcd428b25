//! Ladder Paths - shortest paths over explicit and implicit graphs
//!
//! Two independent engines live in this crate:
//!
//! * a weighted shortest-path engine: Dijkstra's algorithm over an adjacency-list
//!   graph with non-negative weights, plus path reconstruction from the predecessor map;
//! * a word-ladder engine: breadth-first search over the implicit graph whose vertices
//!   are dictionary words and whose edges join words at edit distance one.

pub mod algorithm;
pub mod data_structures;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod graph;
pub mod ladder;
pub mod output;
#[cfg(feature = "python")]
mod python;
pub mod web;

pub use algorithm::{dijkstra::Dijkstra, extract_path, ShortestPathAlgorithm, ShortestPathResult};
/// Re-export main types for convenient use
pub use graph::directed::{DirectedGraph, Edge};
pub use ladder::{
    generate_ladder, is_adjacent, neighbors_of, validate_ladder, Dictionary, LadderConfig,
    NeighborStrategy, WordLadder,
};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(usize, usize),

    #[error("Negative edge weight: {0}")]
    NegativeWeight(f64),

    #[error("Source vertex not found in graph")]
    SourceNotFound,

    #[error("Substitution-only search needs words of one length, found lengths {0:?}")]
    MixedWordLengths(Vec<usize>),

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Algorithm execution error: {0}")]
    AlgorithmError(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
