//! Form command and query handlers.

mod get_active_form;
mod list_forms;
mod register_form;

pub use get_active_form::GetActiveFormHandler;
pub use list_forms::ListFormsHandler;
pub use register_form::{
    RegisterFormCommand, RegisterFormError, RegisterFormHandler, RegisterFormResult,
};
