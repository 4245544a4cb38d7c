//! reelbox-api library - backend API with TTL-gated movie cache
//!
//! Resolves movie queries against SQLite storage, refreshing stale datasets
//! from the reelbox-omdb backend through the refresh coordinator. Also
//! serves the static web UI.

use axum::http::{header, HeaderValue};
use axum::Router;
use std::sync::Arc;
use tower_http::set_header::SetResponseHeaderLayer;

pub mod api;
pub mod db;
pub mod ports;
pub mod refresh;
pub mod upstream;

pub use refresh::Resolver;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Refresh coordinator holding the injected storage, import-log and
    /// fetcher ports
    pub resolver: Arc<Resolver>,
}

impl AppState {
    /// Create new application state
    pub fn new(resolver: Resolver) -> Self {
        Self {
            resolver: Arc::new(resolver),
        }
    }
}

/// Build application router
///
/// `/api/fetch/:which` is the legacy alias the web UI calls. Every response
/// carries `Cache-Control: no-store`; the only cache in this system is the
/// relational store behind the resolver.
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/movies", get(api::resolve_by_query))
        .route("/fetch/:which", get(api::resolve_by_key))
        .route("/api/fetch/:which", get(api::resolve_by_key))
        .merge(api::health_routes())
        .route("/", get(api::serve_index))
        .route("/static/app.js", get(api::serve_app_js))
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .with_state(state)
}
