//! Common error types for Reelbox

use thiserror::Error;

/// Common result type for Reelbox operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the Reelbox services
///
/// Upstream failures carry their payload structurally (status code, shape
/// description) so callers branch on the variant, never on message text.
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Upstream responded with a non-success HTTP status
    #[error("Upstream {status}")]
    Upstream { status: u16 },

    /// Upstream payload failed normalization or schema validation
    #[error("Bad data from upstream: {0}")]
    BadUpstreamShape(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Whether this error belongs to the gateway class (the upstream cannot
    /// be trusted right now)
    pub fn is_gateway(&self) -> bool {
        matches!(self, Error::Upstream { .. } | Error::BadUpstreamShape(_))
    }
}
