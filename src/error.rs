//! Error types for the key-value server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == KV Error Enum ==
/// Unified error type for the key-value server.
#[derive(Error, Debug)]
pub enum KvError {
    /// Key not present in the store (Get or Delete)
    #[error("key not found: {0}")]
    NotFound(String),

    /// Malformed JSON body, missing required field, or missing query parameter
    #[error("{0}")]
    InvalidInput(String),

    /// Store operation failed for reasons other than absence.
    /// Not reachable through the in-memory store in normal operation;
    /// reserved for a persistent backend's I/O failures.
    #[error("internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for KvError {
    fn into_response(self) -> Response {
        let status = match &self {
            KvError::NotFound(_) => StatusCode::NOT_FOUND,
            KvError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            KvError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

impl From<prometheus::Error> for KvError {
    fn from(err: prometheus::Error) -> Self {
        KvError::Internal(err.to_string())
    }
}

// == Result Type Alias ==
/// Convenience Result type for the key-value server.
pub type Result<T> = std::result::Result<T, KvError>;
