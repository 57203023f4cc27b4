//! API error type and the JSON error body.
//!
//! Every failed request answers with `{success: false, error, code}`.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::application::handlers::{
    ProcessSpeechError, RegisterFormError, StartConversationError, SynthesizeSpeechError,
};
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Error body returned by every endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub code: String,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            code: code.to_string(),
        }
    }
}

/// Errors surfaced by HTTP handlers.
#[derive(Debug)]
pub enum ApiError {
    /// The client sent something unusable (400).
    BadRequest { code: ErrorCode, message: String },
    /// Something failed on our side or at a collaborator (500).
    Internal { code: ErrorCode, message: String },
}

impl ApiError {
    pub fn bad_request(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::BadRequest {
            code,
            message: message.into(),
        }
    }

    pub fn internal(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Internal {
            code,
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        let domain = DomainError::from(err);
        ApiError::bad_request(domain.code, domain.message)
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError::internal(err.code, err.message)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::bad_request(ErrorCode::ValidationFailed, rejection.body_text())
    }
}

impl From<RegisterFormError> for ApiError {
    fn from(err: RegisterFormError) -> Self {
        match err {
            RegisterFormError::InvalidForm(e) => e.into(),
            RegisterFormError::Repository(e) => e.into(),
        }
    }
}

impl From<StartConversationError> for ApiError {
    fn from(err: StartConversationError) -> Self {
        match err {
            StartConversationError::MissingForm => {
                ApiError::bad_request(ErrorCode::ValidationFailed, err.to_string())
            }
            StartConversationError::InvalidForm(e) => e.into(),
            StartConversationError::Repository(e) => e.into(),
        }
    }
}

impl From<ProcessSpeechError> for ApiError {
    fn from(err: ProcessSpeechError) -> Self {
        match err {
            ProcessSpeechError::InvalidConversationId => {
                ApiError::bad_request(ErrorCode::ConversationNotFound, err.to_string())
            }
            ProcessSpeechError::EmptyText => {
                ApiError::bad_request(ErrorCode::EmptyField, err.to_string())
            }
            ProcessSpeechError::Repository(e) => e.into(),
        }
    }
}

impl From<SynthesizeSpeechError> for ApiError {
    fn from(err: SynthesizeSpeechError) -> Self {
        match err {
            SynthesizeSpeechError::EmptyText => {
                ApiError::bad_request(ErrorCode::EmptyField, err.to_string())
            }
            SynthesizeSpeechError::Synthesis(_) => {
                ApiError::internal(ErrorCode::SpeechSynthesisFailed, err.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::BadRequest { code, message } => ErrorResponse::new(code, message),
            ApiError::Internal { code, message } => {
                tracing::error!(code = %code, error = %message, "Request failed");
                ErrorResponse::new(code, message)
            }
        };

        (status, Json(body)).into_response()
    }
}
