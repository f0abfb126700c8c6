//! Survey API server binary.
//!
//! Initializes structured logging, creates the in-memory store and
//! serves the API on port 3001 until `Ctrl-C`.

use std::sync::Arc;

use survey_api::{start_server, AppState, ServerConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Application entry point for the survey server.
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let config = ServerConfig::default();
    info!(host = %config.host, port = config.port, "survey-server starting");

    let state = Arc::new(AppState::new());
    start_server(&config, state).await?;

    Ok(())
}
