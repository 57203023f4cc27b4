//! Accumulated field values and the merge policy for new extractions.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::form::FormSchema;

/// A partial field-name → value mapping as returned by the language model.
pub type PartialExtraction = Map<String, Value>;

/// Field values collected so far, keyed by schema field name, in the order
/// they were first collected.
///
/// # Invariants
///
/// - Every key names a field of the conversation's schema
/// - Every value is a non-blank JSON string
/// - A key, once present, is never removed and keeps its position
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtractedData(Map<String, Value>);

/// What a merge changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Fields that had no value before.
    pub added: Vec<String>,
    /// Fields whose value was replaced by a different one.
    pub updated: Vec<String>,
    /// Keys from the partial mapping that were not stored.
    pub ignored: Vec<String>,
}

impl MergeOutcome {
    /// True when the merge left the data untouched.
    pub fn is_unchanged(&self) -> bool {
        self.added.is_empty() && self.updated.is_empty()
    }
}

impl ExtractedData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Field names in collection order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Merges a partial extraction into the accumulated values.
    ///
    /// Keys are resolved against `schema` (exact, then case-insensitive);
    /// unknown keys are ignored. `null`, blank strings, arrays and objects
    /// never clear or replace a value. Numbers and booleans are stored as
    /// text. Any other value overwrites the existing one.
    pub fn merge(&mut self, partial: &PartialExtraction, schema: &FormSchema) -> MergeOutcome {
        let mut outcome = MergeOutcome::default();

        for (key, value) in partial {
            let Some(name) = schema.canonical_name(key) else {
                outcome.ignored.push(key.clone());
                continue;
            };
            let Some(text) = scalar_text(value) else {
                outcome.ignored.push(key.clone());
                continue;
            };

            match self.0.get(name).and_then(Value::as_str) {
                Some(existing) if existing == text => {}
                Some(_) => {
                    outcome.updated.push(name.to_string());
                    self.0.insert(name.to_string(), Value::String(text));
                }
                None => {
                    outcome.added.push(name.to_string());
                    self.0.insert(name.to_string(), Value::String(text));
                }
            }
        }

        outcome
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
