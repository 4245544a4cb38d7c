//! Resolve endpoints
//!
//! `/movies?q=` accepts any non-empty query string; `/fetch/:which` accepts
//! one of the three canonical route keys and fails with 404 for anything
//! else, before any upstream traffic happens.

use super::ApiError;
use crate::refresh::Resolution;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use reelbox_common::{Error, Movie};
use serde::{Deserialize, Serialize};

/// Query parameters for resolve-by-query
#[derive(Debug, Deserialize)]
pub struct MoviesQuery {
    #[serde(default)]
    pub q: String,
}

/// Response shape of both resolve endpoints
#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    pub items: Vec<Movie>,
    pub refreshed: bool,
}

impl From<Resolution> for ResolveResponse {
    fn from(resolution: Resolution) -> Self {
        Self {
            items: resolution.items,
            refreshed: resolution.refreshed,
        }
    }
}

/// Canonical route keys and the query strings they stand for
fn query_for_key(which: &str) -> Option<&'static str> {
    match which {
        "matrix" => Some("Matrix"),
        "matrix-reloaded" => Some("Matrix Reloaded"),
        "matrix-revolutions" => Some("Matrix Revolutions"),
        _ => None,
    }
}

/// GET /movies?q=Matrix
pub async fn resolve_by_query(
    State(state): State<AppState>,
    Query(params): Query<MoviesQuery>,
) -> Result<Json<ResolveResponse>, ApiError> {
    let query = params.q.trim();
    if query.is_empty() {
        return Err(Error::InvalidInput("Missing query parameter q".to_string()).into());
    }

    let resolution = state.resolver.resolve(query).await?;
    Ok(Json(resolution.into()))
}

/// GET /fetch/:which
///
/// Also mounted at /api/fetch/:which, the path the web UI calls.
pub async fn resolve_by_key(
    State(state): State<AppState>,
    Path(which): Path<String>,
) -> Result<Json<ResolveResponse>, ApiError> {
    let Some(query) = query_for_key(&which) else {
        return Err(Error::NotFound(format!("Unknown dataset: {which}")).into());
    };

    let resolution = state.resolver.resolve(query).await?;
    Ok(Json(resolution.into()))
}
