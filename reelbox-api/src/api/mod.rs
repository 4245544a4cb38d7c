//! HTTP API handlers for reelbox-api

pub mod health;
pub mod movies;
pub mod ui;

pub use health::health_routes;
pub use movies::{resolve_by_key, resolve_by_query};
pub use ui::{serve_app_js, serve_index};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use reelbox_common::Error;
use serde_json::json;

/// Error wrapper mapping the common error kinds onto HTTP statuses
///
/// Gateway-class failures (upstream status, bad upstream shape) become 502;
/// everything unexpected is a plain 500. The mapping branches on the error
/// variant, never on message text.
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
