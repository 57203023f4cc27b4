//! Prompt construction for the extraction and follow-up model calls.
//!
//! Both prompts are pure functions of conversation state, so they can be
//! asserted on in tests without a model.

use super::extracted_data::ExtractedData;
use super::message::Message;
use crate::domain::form::FormSchema;

/// A system/user prompt pair for a single completion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

/// Builds the prompt asking the model for new field values in `input`.
pub fn extraction_prompt(
    schema: &FormSchema,
    history: &[Message],
    input: &str,
    existing: &ExtractedData,
) -> Prompt {
    let system = format!(
        "You are AutoForm AI, extracting form field values from user input for a {}.",
        schema.title
    );

    let user = format!(
        r#"Form fields:
{fields}

Conversation history:
{history}

Current user input: "{input}"
Existing extracted data: {existing}

Instructions:
- Extract all information clearly mentioned in the current user input, using the conversation history for context.
- For phone numbers, return digits only (remove spaces, dashes, etc.).
- For dates, format as YYYY-MM-DD if possible.
- For PAN cards, return alphanumeric characters only.
- Do not overwrite existing data unless new information explicitly contradicts or updates it.
- If the input is ambiguous, prioritize the most likely field based on context and field type.
- Return only a JSON object containing the newly extracted or updated field values, using the exact field names above."#,
        fields = schema.describe_fields(),
        history = history_json(history),
        input = input,
        existing = compact_json(existing),
    );

    Prompt { system, user }
}

/// Builds the prompt asking the model to phrase a question for `fields_to_ask`.
///
/// Only the fields being asked about are named; the rest of the missing
/// fields are left for later turns.
pub fn follow_up_prompt(
    schema: &FormSchema,
    history: &[Message],
    existing: &ExtractedData,
    fields_to_ask: &[String],
) -> Prompt {
    let system = format!(
        "You are AutoForm AI, a friendly assistant helping a user fill out a {}.",
        schema.title
    );

    let user = format!(
        r#"Conversation history:
{history}

Current extracted data: {existing}
Fields to ask for now: {fields}

Instructions:
- Craft a short, natural follow-up asking for these fields: {fields}.
- Keep the tone friendly and conversational. For example:
  - If several fields are missing: "Thanks! Could you also share the applicant’s gender, occupation, and tax status?"
  - If only one field is missing: "Great! Could you share the applicant’s gender?"
- Avoid repeating already provided information.
- Do not say this will help complete the application or anything similar.
- Return only the conversational message."#,
        history = history_json(history),
        existing = compact_json(existing),
        fields = fields_to_ask.join(", "),
    );

    Prompt { system, user }
}

fn history_json(history: &[Message]) -> String {
    serde_json::to_string_pretty(history).unwrap_or_else(|_| "[]".to_string())
}

fn compact_json(data: &ExtractedData) -> String {
    serde_json::to_string(data).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::form::{FieldSpec, FieldType};
    use serde_json::json;

    fn schema() -> FormSchema {
        FormSchema::new(
            "Contact Form",
            vec![
                FieldSpec::required("Name", FieldType::String),
                FieldSpec::optional("Date of Birth", FieldType::Date),
            ],
        )
    }

    #[test]
    fn extraction_prompt_lists_fields_and_input() {
        let history = vec![Message::assistant("Hello!"), Message::user("I am Asha")];
        let prompt = extraction_prompt(&schema(), &history, "I am Asha", &ExtractedData::new());

        assert!(prompt.system.contains("Contact Form"));
        assert!(prompt.user.contains("- Name (string, required)"));
        assert!(prompt.user.contains("- Date of Birth (date, optional)"));
        assert!(prompt.user.contains("Current user input: \"I am Asha\""));
        assert!(prompt.user.contains("\"role\": \"user\""));
        assert!(prompt.user.contains("Existing extracted data: {}"));
        assert!(prompt.user.contains("YYYY-MM-DD"));
    }

    #[test]
    fn extraction_prompt_includes_existing_data() {
        let mut existing = ExtractedData::new();
        existing.merge(json!({"Name": "Asha"}).as_object().unwrap(), &schema());

        let prompt = extraction_prompt(&schema(), &[], "born 1990", &existing);

        assert!(prompt.user.contains(r#"Existing extracted data: {"Name":"Asha"}"#));
    }

    #[test]
    fn follow_up_prompt_names_requested_fields() {
        let fields = vec!["Name".to_string(), "Date of Birth".to_string()];
        let prompt = follow_up_prompt(&schema(), &[], &ExtractedData::new(), &fields);

        assert!(prompt.system.contains("Contact Form"));
        assert!(prompt.user.contains("Fields to ask for now: Name, Date of Birth"));
    }
}
