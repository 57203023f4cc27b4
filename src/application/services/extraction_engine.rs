//! ExtractionEngine - asks the language model for new field values.
//!
//! Extraction never fails a turn: collaborator errors and unparseable
//! responses both yield an empty mapping.

use std::sync::Arc;

use crate::domain::conversation::{extraction_prompt, parse_extraction, Conversation, PartialExtraction};
use crate::ports::{AIProvider, CompletionPurpose, CompletionRequest, MessageRole, RequestMetadata};

/// Sampling temperature for extraction requests.
pub const EXTRACTION_TEMPERATURE: f32 = 0.1;

/// Token cap for extraction responses.
pub const EXTRACTION_MAX_TOKENS: u32 = 500;

/// Extracts partial field values from user input.
pub struct ExtractionEngine {
    ai_provider: Arc<dyn AIProvider>,
}

impl ExtractionEngine {
    pub fn new(ai_provider: Arc<dyn AIProvider>) -> Self {
        Self { ai_provider }
    }

    /// Returns the values the model found in `input`.
    ///
    /// `conversation` supplies the schema, the history (which should already
    /// contain `input` as its latest user turn) and the existing values.
    pub async fn extract(&self, conversation: &Conversation, input: &str) -> PartialExtraction {
        let prompt = extraction_prompt(
            conversation.form(),
            conversation.messages(),
            input,
            conversation.extracted_data(),
        );

        let request = CompletionRequest::new(
            RequestMetadata::new(CompletionPurpose::Extraction).for_conversation(conversation.id()),
        )
        .with_system_prompt(prompt.system)
        .with_message(MessageRole::User, prompt.user)
        .with_temperature(EXTRACTION_TEMPERATURE)
        .with_max_tokens(EXTRACTION_MAX_TOKENS);

        let response = match self.ai_provider.complete(request).await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(
                    conversation_id = %conversation.id(),
                    error = %err,
                    "Extraction request failed; continuing with no new values"
                );
                return PartialExtraction::new();
            }
        };

        match parse_extraction(&response.content) {
            Ok(partial) => {
                tracing::debug!(
                    conversation_id = %conversation.id(),
                    keys = partial.len(),
                    tokens = response.usage.total_tokens,
                    "Extraction parsed"
                );
                partial
            }
            Err(err) => {
                tracing::warn!(
                    conversation_id = %conversation.id(),
                    error = %err,
                    "Extraction response unusable; continuing with no new values"
                );
                PartialExtraction::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};
    use crate::domain::form::{FieldSpec, FieldType, FormSchema};
    use serde_json::json;

    fn conversation_with_input(input: &str) -> Conversation {
        let mut conversation = Conversation::start(FormSchema::new(
            "Contact Form",
            vec![
                FieldSpec::required("Name", FieldType::String),
                FieldSpec::required("Phone", FieldType::Phone),
            ],
        ))
        .unwrap();
        conversation.record_user_message(input);
        conversation
    }

    #[tokio::test]
    async fn returns_parsed_mapping() {
        let provider = Arc::new(MockAIProvider::new().with_response(
            "Here you go:\n```json\n{\"Name\": \"Asha\"}\n```",
        ));
        let engine = ExtractionEngine::new(provider.clone());

        let partial = engine.extract(&conversation_with_input("I'm Asha"), "I'm Asha").await;

        assert_eq!(partial.get("Name"), Some(&json!("Asha")));
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn request_uses_extraction_parameters() {
        let provider = Arc::new(MockAIProvider::new().with_response("{}"));
        let engine = ExtractionEngine::new(provider.clone());
        let conversation = conversation_with_input("call me on 98765 43210");

        engine.extract(&conversation, "call me on 98765 43210").await;

        let call = provider.last_call().unwrap();
        assert_eq!(call.temperature, Some(EXTRACTION_TEMPERATURE));
        assert_eq!(call.max_tokens, Some(EXTRACTION_MAX_TOKENS));
        assert_eq!(call.metadata.purpose, CompletionPurpose::Extraction);
        assert_eq!(call.metadata.conversation_id, Some(conversation.id()));
        assert!(call.prompt_text().contains("Current user input: \"call me on 98765 43210\""));
        assert!(call.prompt_text().contains("- Phone (phone, required)"));
    }

    #[tokio::test]
    async fn provider_failure_yields_empty_mapping() {
        let provider = Arc::new(
            MockAIProvider::new().with_error(MockError::Unavailable {
                message: "down".to_string(),
            }),
        );
        let engine = ExtractionEngine::new(provider);

        let partial = engine.extract(&conversation_with_input("hi"), "hi").await;

        assert!(partial.is_empty());
    }

    #[tokio::test]
    async fn response_without_json_yields_empty_mapping() {
        let provider = Arc::new(MockAIProvider::new().with_response("I didn't catch any details."));
        let engine = ExtractionEngine::new(provider);

        let partial = engine.extract(&conversation_with_input("hmm"), "hmm").await;

        assert!(partial.is_empty());
    }
}
