//! Error types for the survey API layer.
//!
//! [`ApiError`] unifies handler failure modes into a single enum that
//! converts into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.
//! Malformed request bodies are not an error: the decoder is permissive.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use crate::store::StoreError;

/// Errors that can occur while handling a request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The store rejected the operation.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// A response payload could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!(error = %self, "Request failed");

        let status = StatusCode::INTERNAL_SERVER_ERROR;
        let body = serde_json::json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
