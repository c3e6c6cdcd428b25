//! Word ladders: shortest one-edit transformation sequences between words.
//!
//! The implicit graph has one vertex per dictionary word and an edge between
//! words at edit distance one. Neighbors are generated on demand and the
//! search is a breadth-first search over partial ladders.

pub mod diagnostics;
pub mod dictionary;
pub mod edit_distance;
pub mod neighbors;
pub mod search;

pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticSink, LogSink, NullSink};
pub use dictionary::Dictionary;
pub use edit_distance::{edit_distance, edit_distance_within, is_adjacent};
pub use neighbors::{
    brute_force_neighbors, neighbors_of, substitution_neighbors, NeighborStrategy, WordSet,
};
pub use search::{generate_ladder, validate_ladder, LadderConfig, WordLadder};
