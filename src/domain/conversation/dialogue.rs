//! Dialogue policy: what to say at the start, between turns, and at the end.

use crate::domain::form::FormSchema;

/// Maximum number of missing fields asked about in a single follow-up.
pub const MAX_FIELDS_PER_TURN: usize = 5;

/// Message sent once every required field has a value.
pub const COMPLETION_MESSAGE: &str =
    "Great job! We've collected all the required information. You can now review and submit your form.";

/// What the assistant should do after a user turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextTurn {
    /// All required fields are collected.
    Complete,
    /// Ask for these fields (at most [`MAX_FIELDS_PER_TURN`], schema order).
    AskFor(Vec<String>),
}

impl NextTurn {
    /// Decides the next turn from the missing required fields.
    pub fn plan(missing: &[String]) -> Self {
        if missing.is_empty() {
            Self::Complete
        } else {
            Self::AskFor(
                missing
                    .iter()
                    .take(MAX_FIELDS_PER_TURN)
                    .cloned()
                    .collect(),
            )
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete)
    }
}

/// Opening assistant message for a new conversation.
pub fn greeting(schema: &FormSchema) -> String {
    format!(
        "Hello! I’ll help you complete your {}. Just share the details you know. \
         I’ll put them in the form for you and let you review everything at the end. \
         If something’s missing, I’ll simply ask a quick follow-up.",
        schema.title
    )
}

/// Templated question used when the model cannot phrase one.
pub fn fallback_question(fields_to_ask: &[String]) -> String {
    format!("Could you provide your {}?", fields_to_ask.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::form::{FieldSpec, FieldType};

    fn names(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("Field {}", i)).collect()
    }

    #[test]
    fn no_missing_fields_completes() {
        assert_eq!(NextTurn::plan(&[]), NextTurn::Complete);
        assert!(NextTurn::plan(&[]).is_complete());
    }

    #[test]
    fn asks_for_all_when_few_missing() {
        assert_eq!(NextTurn::plan(&names(2)), NextTurn::AskFor(names(2)));
    }

    #[test]
    fn truncates_to_first_five_missing() {
        let plan = NextTurn::plan(&names(8));
        assert_eq!(plan, NextTurn::AskFor(names(5)));
    }

    #[test]
    fn greeting_names_form_title() {
        let schema = FormSchema::new(
            "Mutual Fund Application Form",
            vec![FieldSpec::required("Name", FieldType::String)],
        );
        assert_eq!(
            greeting(&schema),
            "Hello! I’ll help you complete your Mutual Fund Application Form. Just share the details you know. \
             I’ll put them in the form for you and let you review everything at the end. \
             If something’s missing, I’ll simply ask a quick follow-up."
        );
    }

    #[test]
    fn fallback_question_joins_fields() {
        let fields = vec!["Phone".to_string(), "Email".to_string()];
        assert_eq!(fallback_question(&fields), "Could you provide your Phone, Email?");
    }
}
