use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use ordered_float::OrderedFloat;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::{extract_path, ShortestPathAlgorithm};
use crate::graph::directed::DirectedGraph;
use crate::graph::traits::Graph;
use crate::ladder::{validate_ladder, CollectingSink, Dictionary, LadderConfig, WordLadder};
use crate::web::models::*;
use crate::Error;

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Open sessions, remembered in the order they were opened
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<Uuid, Session>,
    opened: VecDeque<Uuid>,
}

impl SessionStore {
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn get(&self, id: &Uuid) -> Option<&Session> {
        self.sessions.get(id)
    }

    pub fn get_mut(&mut self, id: &Uuid) -> Option<&mut Session> {
        self.sessions.get_mut(id)
    }

    /// Session ids, oldest first
    pub fn ids(&self) -> Vec<Uuid> {
        self.opened.iter().copied().collect()
    }

    /// Adds a session, closing the oldest ones first so that at most
    /// `capacity` stay open. Returns the ids that were closed.
    pub fn open(&mut self, session: Session, capacity: usize) -> Vec<Uuid> {
        let mut evicted = Vec::new();
        while self.sessions.len() >= capacity.max(1) {
            match self.opened.pop_front() {
                Some(id) => {
                    self.sessions.remove(&id);
                    evicted.push(id);
                }
                None => break,
            }
        }
        self.opened.push_back(session.id);
        self.sessions.insert(session.id, session);
        evicted
    }

    pub fn close(&mut self, id: &Uuid) -> Option<Session> {
        let session = self.sessions.remove(id)?;
        self.opened.retain(|open| open != id);
        Some(session)
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<Mutex<SessionStore>>,
    /// Default word list for ladder queries. Never mutated by a query.
    pub dictionary: Arc<Dictionary>,
    /// Opening a session past this count closes the oldest one
    pub max_sessions: usize,
}

impl AppState {
    pub fn new(dictionary: Dictionary) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(SessionStore::default())),
            dictionary: Arc::new(dictionary),
            max_sessions: 1000,
        }
    }

    pub fn with_max_sessions(mut self, max_sessions: usize) -> Self {
        self.max_sessions = max_sessions;
        self
    }

    fn lock_sessions(&self) -> Result<MutexGuard<'_, SessionStore>, ApiError> {
        self.sessions
            .lock()
            .map_err(|_| api_error(StatusCode::INTERNAL_SERVER_ERROR, "session_store_poisoned", "Session store is unavailable".to_string()))
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/graphs", post(create_graph))
        .route("/api/graphs/:session_id", get(get_graph))
        .route("/api/routes/:session_id", post(run_route))
        .route("/api/ladders", post(run_ladder))
        .route("/api/sessions", get(list_sessions))
        .route("/api/sessions/:session_id", get(get_session).delete(delete_session))
        .route("/api/health", get(health_check))
}

/// Upload a graph and open a session for it
pub async fn create_graph(
    State(state): State<AppState>,
    Json(graph): Json<WebGraph>,
) -> Result<Json<Session>, ApiError> {
    convert_web_graph_to_rust(&graph)?;

    let session = Session::new(graph);
    let evicted = state.lock_sessions()?.open(session.clone(), state.max_sessions);
    for id in evicted {
        log::info!("session {} closed to stay within {} sessions", id, state.max_sessions);
    }

    log::debug!(
        "session {} opened with {} vertices and {} edges",
        session.id,
        session.graph.num_vertices,
        session.graph.edges.len()
    );
    Ok(Json(session))
}

/// Get graph data for a session
pub async fn get_graph(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<WebGraph>, ApiError> {
    let sessions = state.lock_sessions()?;
    sessions
        .get(&session_id)
        .map(|session| Json(session.graph.clone()))
        .ok_or_else(session_not_found)
}

/// Run Dijkstra on a session graph and extract one route
pub async fn run_route(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<RouteRequest>,
) -> Result<Json<RouteResponse>, ApiError> {
    let graph = {
        let sessions = state.lock_sessions()?;
        match sessions.get(&session_id) {
            Some(session) => session.graph.clone(),
            None => return Err(session_not_found()),
        }
    };

    let rust_graph = convert_web_graph_to_rust(&graph)?;
    if !rust_graph.has_vertex(request.destination) {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            "invalid_vertex",
            Error::InvalidVertex(request.destination).to_string(),
        ));
    }

    let start_time = Instant::now();
    let dijkstra = Dijkstra::new();
    let result = dijkstra
        .compute_shortest_paths(&rust_graph, request.source)
        .map_err(|err| api_error(StatusCode::BAD_REQUEST, "invalid_source", err.to_string()))?;
    let path = extract_path(&result, request.destination);
    let execution_time = start_time.elapsed();

    let response = RouteResponse {
        execution_id: Uuid::new_v4(),
        algorithm: <Dijkstra as ShortestPathAlgorithm<OrderedFloat<f64>, DirectedGraph<OrderedFloat<f64>>>>::name(&dijkstra).to_string(),
        source: request.source,
        destination: request.destination,
        found: !path.is_empty(),
        cost: result.distance(request.destination).map(OrderedFloat::into_inner),
        path,
        reachable_vertices: result.reachable_count(),
        execution_time_ms: execution_time.as_secs_f64() * 1000.0,
    };

    {
        let mut sessions = state.lock_sessions()?;
        if let Some(session) = sessions.get_mut(&session_id) {
            session.last_route = Some(response.clone());
        }
    }

    Ok(Json(response))
}

/// Find a word ladder, against the request's own words or the server dictionary
pub async fn run_ladder(
    State(state): State<AppState>,
    Json(request): Json<LadderRequest>,
) -> Result<Json<LadderResponse>, ApiError> {
    let begin_word = request.begin_word.trim().to_string();
    let end_word = request.end_word.trim().to_string();

    let request_dictionary;
    let dictionary: &Dictionary = match &request.words {
        Some(words) => {
            request_dictionary = Dictionary::from_words(words);
            &request_dictionary
        }
        None => state.dictionary.as_ref(),
    };

    let config = LadderConfig {
        strategy: request.strategy,
        ignore_case: request.ignore_case,
    };
    let search = WordLadder::new(dictionary, config)
        .map_err(|err| api_error(StatusCode::BAD_REQUEST, "invalid_strategy", err.to_string()))?;

    let start_time = Instant::now();
    let sink = CollectingSink::new();
    let ladder = search.generate(&begin_word, &end_word, &sink);
    let execution_time = start_time.elapsed();

    Ok(Json(LadderResponse {
        execution_id: Uuid::new_v4(),
        begin_word,
        end_word,
        strategy: request.strategy,
        found: !ladder.is_empty(),
        valid: !ladder.is_empty() && validate_ladder(&ladder),
        ladder,
        dictionary_size: dictionary.len(),
        diagnostics: sink.into_diagnostics(),
        execution_time_ms: execution_time.as_secs_f64() * 1000.0,
    }))
}

/// List all active sessions
pub async fn list_sessions(State(state): State<AppState>) -> Result<Json<Vec<Uuid>>, ApiError> {
    let sessions = state.lock_sessions()?;
    Ok(Json(sessions.ids()))
}

/// Get session information
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<Session>, ApiError> {
    let sessions = state.lock_sessions()?;
    sessions
        .get(&session_id)
        .map(|session| Json(session.clone()))
        .ok_or_else(session_not_found)
}

/// Close a session and return what it held
pub async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<Session>, ApiError> {
    let session = state
        .lock_sessions()?
        .close(&session_id)
        .ok_or_else(session_not_found)?;
    log::debug!("session {} closed", session_id);
    Ok(Json(session))
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "dictionary_size": state.dictionary.len(),
    }))
}

// Helper functions

fn api_error(status: StatusCode, error: &str, message: String) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            message,
            details: None,
        }),
    )
}

fn session_not_found() -> ApiError {
    api_error(StatusCode::NOT_FOUND, "session_not_found", "Session not found".to_string())
}

fn convert_web_graph_to_rust(web_graph: &WebGraph) -> Result<DirectedGraph<OrderedFloat<f64>>, ApiError> {
    let edges = web_graph
        .edges
        .iter()
        .map(|edge| (edge.source, edge.destination, OrderedFloat(edge.weight)));

    DirectedGraph::from_edges(web_graph.num_vertices, edges)
        .map_err(|err| api_error(StatusCode::BAD_REQUEST, "invalid_graph", err.to_string()))
}
