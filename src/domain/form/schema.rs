//! Form schema value object.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::field::FieldSpec;
use crate::domain::foundation::ValidationError;

/// An ordered list of field declarations describing one fillable form.
///
/// Field order only affects display and prompt composition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSchema {
    pub title: String,
    pub fields: Vec<FieldSpec>,
}

impl FormSchema {
    /// Creates a schema from a title and fields.
    pub fn new(title: impl Into<String>, fields: Vec<FieldSpec>) -> Self {
        Self {
            title: title.into(),
            fields,
        }
    }

    /// Checks that the schema is usable for a conversation.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the title or any field name is blank
    /// - `InvalidFormat` if there are no fields
    /// - `DuplicateField` if two fields share a name
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        if self.fields.is_empty() {
            return Err(ValidationError::invalid_format(
                "fields",
                "at least one field is required",
            ));
        }

        let mut seen = HashSet::with_capacity(self.fields.len());
        for field in &self.fields {
            if field.name.trim().is_empty() {
                return Err(ValidationError::empty_field("fields.name"));
            }
            if !seen.insert(field.name.as_str()) {
                return Err(ValidationError::duplicate_field(&field.name));
            }
        }
        Ok(())
    }

    /// Looks up a field by exact name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Resolves a name to the schema's canonical field name.
    ///
    /// Exact matches win; otherwise a case-insensitive, whitespace-trimmed
    /// match is accepted.
    pub fn canonical_name(&self, name: &str) -> Option<&str> {
        if let Some(field) = self.field(name) {
            return Some(&field.name);
        }
        let wanted = name.trim().to_lowercase();
        self.fields
            .iter()
            .find(|f| f.name.trim().to_lowercase() == wanted)
            .map(|f| f.name.as_str())
    }

    /// Names of required fields, in schema order.
    pub fn required_field_names(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name.as_str())
    }

    /// Prompt lines describing every field.
    pub fn describe_fields(&self) -> String {
        self.fields
            .iter()
            .map(FieldSpec::describe)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
