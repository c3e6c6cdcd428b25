use axum::{
    http::{header, Method},
    Router,
};
use serde::Deserialize;
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::ladder::Dictionary;
use crate::web::api::{create_router, AppState};

/// Configuration for the web server
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
    /// Word list served to ladder queries that don't bring their own words
    pub dictionary_path: Option<String>,
    pub enable_cors: bool,
    pub max_sessions: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3005,
            dictionary_path: None,
            enable_cors: true,
            max_sessions: 1000,
        }
    }
}

/// Build the application for a configuration, loading its dictionary.
///
/// An unreadable dictionary is logged and replaced by an empty one.
pub fn build_app(config: &ServerConfig) -> Router {
    let dictionary = match &config.dictionary_path {
        Some(path) => Dictionary::load_or_empty(path),
        None => Dictionary::new(),
    };
    log::info!("serving ladders over {} dictionary words", dictionary.len());

    let app_state = AppState::new(dictionary).with_max_sessions(config.max_sessions);
    let app = Router::new().merge(create_router()).with_state(app_state);

    if config.enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

        app.layer(ServiceBuilder::new().layer(cors).into_inner())
    } else {
        app
    }
}

/// Start the web server on `port` with default settings
pub async fn start_server(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    start_server_with_config(ServerConfig {
        port,
        ..Default::default()
    })
    .await
}

/// Start the web server with custom configuration
pub async fn start_server_with_config(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_app(&config);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    log::info!("ladder_paths web server listening on http://{}", addr);
    println!("🚀 Ladder Paths Web Server starting on http://{}", addr);
    println!("📊 API available under http://{}/api", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
