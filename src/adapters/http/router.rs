//! Top-level API router.

use std::path::Path;

use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::services::ServeDir;

use super::form::form_router;
use super::submission::submission_router;
use super::voice::voice_router;
use super::AppState;

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /health - Liveness probe
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Builds the complete API with state applied.
///
/// Middleware (CORS, tracing, timeouts, compression) is layered on by the
/// binary so tests can drive the bare router.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(form_router())
        .merge(voice_router())
        .merge(submission_router())
        .with_state(state)
}

/// Serves the browser client from `static_dir` for every path the API does
/// not claim. `/` resolves to `index.html`.
pub fn with_web_client(router: Router, static_dir: impl AsRef<Path>) -> Router {
    router.fallback_service(ServeDir::new(static_dir))
}
