//! reelbox-omdb library - upstream-facing movie search service
//!
//! Queries the third-party OMDb search API, normalizes its payload into the
//! stable internal movie shape, and serves the three fixed datasets over
//! HTTP for reelbox-api to consume.

use axum::http::{header, HeaderValue};
use axum::Router;
use std::sync::Arc;
use tower_http::set_header::SetResponseHeaderLayer;

pub mod api;
pub mod normalize;
pub mod omdb;

pub use omdb::OmdbClient;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// OMDb search client
    pub omdb: Arc<OmdbClient>,
}

impl AppState {
    /// Create new application state
    pub fn new(omdb: OmdbClient) -> Self {
        Self {
            omdb: Arc::new(omdb),
        }
    }
}

/// Build application router
///
/// Every response carries `Cache-Control: no-store`; the cache lives in
/// reelbox-api, not in any HTTP intermediary.
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/movies", get(api::movies))
        .route("/movies-reloaded", get(api::movies_reloaded))
        .route("/movies-revolutions", get(api::movies_revolutions))
        .merge(api::health_routes())
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .with_state(state)
}
