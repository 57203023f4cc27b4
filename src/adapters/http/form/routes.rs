//! Route configuration for form endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{get_current_form, list_forms, register_form};
use crate::adapters::http::AppState;

/// Creates the form router.
///
/// Routes:
/// - `GET /api/current-form` - Active schema (default form when none registered)
/// - `POST /api/forms` - Register a schema and make it active
/// - `GET /api/forms` - List registered schemas
pub fn form_router() -> Router<AppState> {
    Router::new()
        .route("/api/current-form", get(get_current_form))
        .route("/api/forms", get(list_forms).post(register_form))
}
