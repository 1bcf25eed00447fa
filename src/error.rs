//! Error types for the admin surface
//!
//! Cache operations themselves never fail; they degrade to "absent" or
//! "declined". These errors exist only where HTTP semantics demand a
//! status code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Cache Error Enum ==
/// Errors surfaced by the admin HTTP endpoints.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Entry absent (missing, expired, or under a disabled strategy)
    #[error("Entry not found: {0}")]
    NotFound(String),

    /// Cache is disabled by configuration or already destroyed
    #[error("Cache is disabled")]
    Disabled,
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::NotFound(_) => StatusCode::NOT_FOUND,
            CacheError::Disabled => StatusCode::SERVICE_UNAVAILABLE,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the admin handlers.
pub type Result<T> = std::result::Result<T, CacheError>;
