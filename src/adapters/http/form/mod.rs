//! HTTP adapter for form schema endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{FormListResponse, FormRequest, FormSummary, RegisterFormResponse};
pub use handlers::{get_current_form, list_forms, register_form};
pub use routes::form_router;
