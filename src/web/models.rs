use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ladder::{Diagnostic, NeighborStrategy};

/// A weighted edge as sent over the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebEdge {
    pub source: usize,
    pub destination: usize,
    pub weight: f64,
}

/// A complete graph as sent over the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebGraph {
    pub num_vertices: usize,
    #[serde(default)]
    pub edges: Vec<WebEdge>,
}

/// Parameters for a single-pair route query
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    pub source: usize,
    pub destination: usize,
}

/// Result of a route query. `path` is empty and `cost` absent when the
/// destination is unreachable.
#[derive(Debug, Clone, Serialize)]
pub struct RouteResponse {
    pub execution_id: Uuid,
    pub algorithm: String,
    pub source: usize,
    pub destination: usize,
    pub found: bool,
    pub path: Vec<usize>,
    pub cost: Option<f64>,
    pub reachable_vertices: usize,
    pub execution_time_ms: f64,
}

/// Parameters for a word-ladder query
#[derive(Debug, Deserialize)]
pub struct LadderRequest {
    pub begin_word: String,
    pub end_word: String,
    /// Word list for this query only; the server dictionary is used when absent
    #[serde(default)]
    pub words: Option<Vec<String>>,
    #[serde(default)]
    pub strategy: NeighborStrategy,
    #[serde(default)]
    pub ignore_case: bool,
}

/// Result of a word-ladder query
#[derive(Debug, Clone, Serialize)]
pub struct LadderResponse {
    pub execution_id: Uuid,
    pub begin_word: String,
    pub end_word: String,
    pub strategy: NeighborStrategy,
    pub found: bool,
    pub ladder: Vec<String>,
    pub valid: bool,
    pub dictionary_size: usize,
    pub diagnostics: Vec<Diagnostic>,
    pub execution_time_ms: f64,
}

/// Error response for API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

/// Session holding an uploaded graph and its latest route result
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: Uuid,
    pub graph: WebGraph,
    pub last_route: Option<RouteResponse>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(graph: WebGraph) -> Self {
        Self {
            id: Uuid::new_v4(),
            graph,
            last_route: None,
            created_at: Utc::now(),
        }
    }
}
