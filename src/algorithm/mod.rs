pub mod traits;
pub mod dijkstra;

pub use traits::{extract_path, path_cost, ShortestPathAlgorithm, ShortestPathResult};
