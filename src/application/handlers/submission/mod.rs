//! Submission handlers.

mod submit_form;

pub use submit_form::{SubmitFormCommand, SubmitFormHandler, SubmitFormResult};
