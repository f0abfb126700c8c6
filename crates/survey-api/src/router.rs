//! Axum router construction for the survey API.
//!
//! Assembles all routes into a single [`Router`] and stamps the fixed
//! CORS headers onto every response, including `204` preflights and
//! `405` rejections.

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue};
use axum::routing::{get, MethodRouter};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Value of `Access-Control-Allow-Origin`.
pub const CORS_ALLOW_ORIGIN: &str = "*";
/// Value of `Access-Control-Allow-Methods`.
pub const CORS_ALLOW_METHODS: &str = "GET, POST, OPTIONS";
/// Value of `Access-Control-Allow-Headers`.
pub const CORS_ALLOW_HEADERS: &str = "Content-Type";

/// Finish a method router: `OPTIONS` gets a preflight answer and any
/// method not registered so far (including `HEAD`) gets `405`.
fn with_cors_methods(route: MethodRouter<Arc<AppState>>) -> MethodRouter<Arc<AppState>> {
    route
        .options(handlers::preflight)
        .head(handlers::method_not_allowed)
        .fallback(handlers::method_not_allowed)
}

/// Build the complete Axum router for the survey server.
///
/// The router includes:
/// - `GET|POST /api/surveys` -- list and create surveys
/// - `GET /api/stats` -- `{"total": N}`
/// - `GET /api/stats/{field}` -- breakdown of one field's values
///
/// Request bodies are read in full; the default body size limit is
/// disabled.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static(CORS_ALLOW_ORIGIN),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(CORS_ALLOW_METHODS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(CORS_ALLOW_HEADERS),
        ));

    Router::new()
        .route(
            "/api/surveys",
            with_cors_methods(get(handlers::list_surveys).post(handlers::create_survey)),
        )
        .route("/api/stats", with_cors_methods(get(handlers::get_stats)))
        .route(
            "/api/stats/{field}",
            with_cors_methods(get(handlers::get_field_breakdown)),
        )
        .layer(DefaultBodyLimit::disable())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
