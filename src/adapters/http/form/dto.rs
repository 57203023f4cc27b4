//! HTTP DTOs for form endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::form::{FieldSpec, FormSchema};
use crate::ports::StoredForm;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// A form schema as sent by the client.
///
/// Missing members default to empty so that schema validation, not JSON
/// decoding, reports what is wrong.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

impl From<FormRequest> for FormSchema {
    fn from(req: FormRequest) -> Self {
        FormSchema::new(req.title, req.fields)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Response for `POST /api/forms`.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterFormResponse {
    pub success: bool,
    pub form_id: String,
    pub message: String,
}

/// A registered form in the list response.
#[derive(Debug, Clone, Serialize)]
pub struct FormSummary {
    pub form_id: String,
    pub title: String,
    pub fields: Vec<FieldSpec>,
}

impl From<StoredForm> for FormSummary {
    fn from(stored: StoredForm) -> Self {
        Self {
            form_id: stored.id.to_string(),
            title: stored.schema.title,
            fields: stored.schema.fields,
        }
    }
}

/// Response for `GET /api/forms`.
#[derive(Debug, Clone, Serialize)]
pub struct FormListResponse {
    pub forms: Vec<FormSummary>,
}
