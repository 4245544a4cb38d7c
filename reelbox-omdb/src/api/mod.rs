//! HTTP API handlers for reelbox-omdb

pub mod health;

pub use health::health_routes;

use crate::normalize::normalize_response;
use crate::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use reelbox_common::{Error, MoviesResponse};
use serde_json::json;

/// Fixed dataset search titles served by this service
const MATRIX: &str = "Matrix";
const MATRIX_RELOADED: &str = "Matrix Reloaded";
const MATRIX_REVOLUTIONS: &str = "Matrix Revolutions";

/// GET /movies
pub async fn movies(State(state): State<AppState>) -> Result<Json<MoviesResponse>, ApiError> {
    fetch_dataset(&state, MATRIX).await
}

/// GET /movies-reloaded
pub async fn movies_reloaded(
    State(state): State<AppState>,
) -> Result<Json<MoviesResponse>, ApiError> {
    fetch_dataset(&state, MATRIX_RELOADED).await
}

/// GET /movies-revolutions
pub async fn movies_revolutions(
    State(state): State<AppState>,
) -> Result<Json<MoviesResponse>, ApiError> {
    fetch_dataset(&state, MATRIX_REVOLUTIONS).await
}

async fn fetch_dataset(state: &AppState, title: &str) -> Result<Json<MoviesResponse>, ApiError> {
    let raw = state.omdb.search(title).await?;
    let normalized = normalize_response(raw)?;
    tracing::info!(title, items = normalized.items.len(), "Serving dataset");
    Ok(Json(normalized))
}

/// Error wrapper mapping the common error kinds onto HTTP statuses
#[derive(Debug)]
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            Error::Upstream { .. } | Error::BadUpstreamShape(_) => StatusCode::BAD_GATEWAY,
            Error::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!(error = %self.0, "Request failed");
        }
        let body = Json(json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}
