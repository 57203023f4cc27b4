//! Form domain module.
//!
//! Form schemas describe the fields a conversation fills: their names,
//! declared types and whether they are required.

mod default_form;
mod field;
mod schema;

pub use default_form::{default_form, DEFAULT_FORM_TITLE};
pub use field::{FieldSpec, FieldType};
pub use schema::FormSchema;
