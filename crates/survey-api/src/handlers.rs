//! REST API endpoint handlers for the survey server.
//!
//! All handlers operate on the shared [`SurveyStore`] inside
//! [`AppState`]. Bodies are fully read before the store is touched and
//! encoded after it is released, so no lock is held across I/O.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/api/surveys` | List all surveys, newest first |
//! | `POST` | `/api/surveys` | Store a survey, return it with its `id` |
//! | `GET` | `/api/stats` | Total number of surveys |
//! | `GET` | `/api/stats/{field}` | Per-value breakdown of one field |
//! | `OPTIONS` | any of the above | CORS preflight, `204` |
//!
//! Every other method on these paths is answered with `405`.
//!
//! [`SurveyStore`]: crate::store::SurveyStore

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{header, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use survey_types::{codec, Stats};
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

/// Encode `payload` and wrap it in a `200` JSON response.
fn json_response<T: Serialize + ?Sized>(payload: &T) -> Result<Response, ApiError> {
    let body = codec::encode(payload)?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

// ---------------------------------------------------------------------------
// /api/surveys
// ---------------------------------------------------------------------------

/// Return every stored survey, newest first.
pub async fn list_surveys(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let surveys = state.store.list().await;
    info!(count = surveys.len(), "Listing surveys");
    json_response(&surveys)
}

/// Decode the request body, store it as a new survey and echo it back.
///
/// The body is read as UTF-8 text (invalid sequences are replaced) and
/// decoded permissively; a malformed body produces a sparse record, not
/// an error.
pub async fn create_survey(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let text = String::from_utf8_lossy(&body);
    let fields = codec::decode_fields(&text);

    let survey = state.store.create(fields).await?;
    info!(id = %survey.id(), fields = survey.fields().len(), "Created survey");
    json_response(&survey)
}

// ---------------------------------------------------------------------------
// /api/stats
// ---------------------------------------------------------------------------

/// Return `{"total": N}` for the current store.
pub async fn get_stats(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let total = state.store.count().await;
    info!(total, "Stats requested");
    json_response(&Stats { total })
}

/// Return the per-value breakdown of a single survey field.
pub async fn get_field_breakdown(
    State(state): State<Arc<AppState>>,
    Path(field): Path<String>,
) -> Result<Response, ApiError> {
    let rows = state.store.breakdown(&field).await;
    info!(field = %field, groups = rows.len(), "Field breakdown requested");
    json_response(&rows)
}

// ---------------------------------------------------------------------------
// Shared method handlers
// ---------------------------------------------------------------------------

/// Answer a CORS preflight with an empty `204`.
pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// Reject an unsupported method with an empty `405`.
pub async fn method_not_allowed(method: Method, uri: Uri) -> StatusCode {
    info!(%method, path = uri.path(), "Method not allowed");
    StatusCode::METHOD_NOT_ALLOWED
}
