//! Background startup helper for embedding the survey server.
//!
//! [`spawn_server`] binds eagerly, so a bad address or busy port is
//! reported to the caller, then serves on a background Tokio task until
//! the returned handle is aborted or the runtime shuts down.
//!
//! # Usage
//!
//! ```rust,ignore
//! use survey_api::{spawn_server, AppState, ServerConfig};
//! use std::sync::Arc;
//!
//! let running = spawn_server(&ServerConfig::default(), Arc::new(AppState::new())).await?;
//! println!("serving on {}", running.addr);
//! ```

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::server::{self, ServerConfig, ServerError};
use crate::state::AppState;

/// Errors that can occur when spawning the survey server.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    /// The server failed to bind or start.
    #[error("server start error: {0}")]
    Server(#[from] ServerError),
}

/// A server running on a background task.
#[derive(Debug)]
pub struct RunningServer {
    /// The address actually bound (resolves port `0`).
    pub addr: SocketAddr,
    /// Handle to the serving task.
    pub handle: JoinHandle<()>,
}

/// Bind the configured address and serve the survey API in the background.
///
/// # Errors
///
/// Returns [`StartupError::Server`] if the address is invalid or cannot
/// be bound. Serving errors after startup are logged by the task.
pub async fn spawn_server(
    config: &ServerConfig,
    state: Arc<AppState>,
) -> Result<RunningServer, StartupError> {
    let listener = server::bind(config).await?;
    let addr = listener
        .local_addr()
        .map_err(|e| ServerError::Bind(format!("local address unavailable: {e}")))?;

    let handle = tokio::spawn(async move {
        if let Err(e) = server::serve(listener, state, std::future::pending::<()>()).await {
            tracing::error!(error = %e, "Survey server exited with error");
        }
    });

    tracing::info!(%addr, "Survey server spawned on background task");

    Ok(RunningServer { addr, handle })
}
