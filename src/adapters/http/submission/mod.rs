//! HTTP adapter for form submission.

mod handlers;
mod routes;

pub use handlers::{submit_form, SubmitFormResponse};
pub use routes::submission_router;
