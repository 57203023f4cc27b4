//! Route configuration for submission endpoints.

use axum::routing::post;
use axum::Router;

use super::handlers::submit_form;
use crate::adapters::http::AppState;

/// Creates the submission router.
pub fn submission_router() -> Router<AppState> {
    Router::new().route("/api/submit-form", post(submit_form))
}
