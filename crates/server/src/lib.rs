//! HTTP boundary for the phishing analyzer.

pub mod error;
pub mod handlers;
pub mod requests;
pub mod responses;
pub mod tracing_init;

use axum::routing::{get, post};
use axum::Router;
use phishguard_core::config::ServerConfig;
use phishguard_core::Analyzer;
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<Analyzer>,
}

impl AppState {
    pub fn new(analyzer: Analyzer) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
        }
    }
}

/// API routes, plus static assets from `static_dir` for every other path.
pub fn build_router(state: AppState, static_dir: Option<&Path>) -> Router {
    let api = Router::new()
        .route("/api/analyze", post(handlers::post_analyze))
        .route("/api/health", get(handlers::health))
        .route("/api/remediation/{level}", get(handlers::get_remediation))
        .with_state(state);

    let app = match static_dir {
        Some(dir) => api.fallback_service(ServeDir::new(dir)),
        None => api,
    };

    app.layer(CatchPanicLayer::custom(error::handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Binds the configured host and port. The host may be a hostname, an IPv4
/// address, or a bare IPv6 address.
pub async fn bind_listener(cfg: &ServerConfig) -> std::io::Result<TcpListener> {
    TcpListener::bind((cfg.host.as_str(), cfg.port)).await
}
