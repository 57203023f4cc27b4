//! HTTP handler for form submission.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::adapters::http::{ApiError, AppState};
use crate::application::handlers::SubmitFormCommand;

#[derive(Debug, Clone, Serialize)]
pub struct SubmitFormResponse {
    pub success: bool,
    pub submission_id: String,
    pub message: String,
}

/// POST /api/submit-form - Accept a filled form (any JSON)
pub async fn submit_form(
    State(state): State<AppState>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = payload?;

    let result = state
        .submit_form_handler()
        .handle(SubmitFormCommand { payload });

    Ok(Json(SubmitFormResponse {
        success: true,
        submission_id: result.submission_id.to_string(),
        message: "Form submitted successfully!".to_string(),
    }))
}
