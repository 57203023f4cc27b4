//! Field declarations within a form schema.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared type of a form field.
///
/// The type only guides extraction (normalization hints in the prompt);
/// every extracted value is stored as a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    String,
    Date,
    Number,
    Phone,
}

impl FieldType {
    /// Returns the wire name of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Date => "date",
            FieldType::Number => "number",
            FieldType::Phone => "phone",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single named, typed field of a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field name, unique within its form.
    pub name: String,

    /// Declared value type.
    #[serde(rename = "type", default)]
    pub field_type: FieldType,

    /// Whether the form is incomplete without this field.
    #[serde(default)]
    pub required: bool,
}

impl FieldSpec {
    /// Creates a new field specification.
    pub fn new(name: impl Into<String>, field_type: FieldType, required: bool) -> Self {
        Self {
            name: name.into(),
            field_type,
            required,
        }
    }

    /// Creates a required field.
    pub fn required(name: impl Into<String>, field_type: FieldType) -> Self {
        Self::new(name, field_type, true)
    }

    /// Creates an optional field.
    pub fn optional(name: impl Into<String>, field_type: FieldType) -> Self {
        Self::new(name, field_type, false)
    }

    /// Renders the field as a prompt line: `- Name (type, required)`.
    pub fn describe(&self) -> String {
        format!(
            "- {} ({}, {})",
            self.name,
            self.field_type,
            if self.required { "required" } else { "optional" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_type_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&FieldType::Phone).unwrap(), "\"phone\"");
        assert_eq!(serde_json::to_string(&FieldType::Date).unwrap(), "\"date\"");
    }

    #[test]
    fn field_spec_uses_type_as_wire_name() {
        let field = FieldSpec::required("Amount", FieldType::Number);
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Amount", "type": "number", "required": true})
        );
    }

    #[test]
    fn field_spec_defaults_type_and_required() {
        let field: FieldSpec = serde_json::from_str(r#"{"name": "City"}"#).unwrap();
        assert_eq!(field.field_type, FieldType::String);
        assert!(!field.required);
    }

    #[test]
    fn field_spec_rejects_unknown_type() {
        let result = serde_json::from_str::<FieldSpec>(r#"{"name": "X", "type": "blob"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn describe_formats_prompt_line() {
        assert_eq!(
            FieldSpec::required("Contact Number", FieldType::Phone).describe(),
            "- Contact Number (phone, required)"
        );
        assert_eq!(
            FieldSpec::optional("Net Worth", FieldType::String).describe(),
            "- Net Worth (string, optional)"
        );
    }
}
