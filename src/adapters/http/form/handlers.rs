//! HTTP handlers for form endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::adapters::http::{ApiError, AppState};
use crate::application::handlers::RegisterFormCommand;

use super::dto::{FormListResponse, FormRequest, RegisterFormResponse};

/// GET /api/current-form - The active schema, or the built-in default
pub async fn get_current_form(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.get_active_form_handler().handle().await)
}

/// POST /api/forms - Register a schema and make it active
pub async fn register_form(
    State(state): State<AppState>,
    payload: Result<Json<FormRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;

    let cmd = RegisterFormCommand {
        schema: request.into(),
    };
    let result = state.register_form_handler().handle(cmd).await?;

    Ok(Json(RegisterFormResponse {
        success: true,
        form_id: result.form_id.to_string(),
        message: "Form saved successfully!".to_string(),
    }))
}

/// GET /api/forms - All registered schemas, oldest first
pub async fn list_forms(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let forms = state.list_forms_handler().handle().await?;

    Ok(Json(FormListResponse {
        forms: forms.into_iter().map(Into::into).collect(),
    }))
}
