//! Shared application state for the survey API server.
//!
//! [`AppState`] is constructed once at startup, wrapped in [`Arc`] and
//! handed to every handler through Axum's `State` extractor.
//!
//! [`Arc`]: std::sync::Arc

use crate::store::SurveyStore;

/// Shared state for the Axum application.
#[derive(Debug, Default)]
pub struct AppState {
    /// The process-lifetime survey store.
    pub store: SurveyStore,
}

impl AppState {
    /// Create application state with an empty store.
    pub fn new() -> Self {
        Self {
            store: SurveyStore::new(),
        }
    }
}
