//! HTTP API for collecting survey submissions.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **`/api/surveys`** -- create a survey (`POST`) or list every stored
//!   survey newest first (`GET`)
//! - **`/api/stats`** -- the total number of stored surveys
//! - **`/api/stats/{field}`** -- per-value counts and percentages for one
//!   survey field
//!
//! # Architecture
//!
//! A single [`SurveyStore`] is created at startup and shared with every
//! handler through [`AppState`]. The store keeps records in memory only,
//! newest first, and allocates identifiers under the same lock that
//! guards insertion. Request bodies are decoded permissively by
//! [`survey_types::codec`]; nothing is rejected for being malformed.
//!
//! Every response on the API paths carries fixed CORS headers; `OPTIONS`
//! is answered with `204` and unsupported methods with `405`.
//!
//! [`SurveyStore`]: store::SurveyStore

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod startup;
pub mod state;
pub mod store;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{start_server, ServerConfig, ServerError, DEFAULT_PORT};
pub use startup::{spawn_server, RunningServer, StartupError};
pub use state::AppState;
pub use store::{StoreError, SurveyStore};
