//! DialogueController - decides and phrases the assistant's next turn.

use std::sync::Arc;

use crate::domain::conversation::{
    fallback_question, follow_up_prompt, Conversation, NextTurn, COMPLETION_MESSAGE,
};
use crate::ports::{AIProvider, CompletionPurpose, CompletionRequest, MessageRole, RequestMetadata};

/// Sampling temperature for follow-up questions.
pub const FOLLOW_UP_TEMPERATURE: f32 = 0.7;

/// Token cap for follow-up questions.
pub const FOLLOW_UP_MAX_TOKENS: u32 = 150;

/// The assistant's reply for a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReply {
    pub message: String,
    pub all_required_collected: bool,
}

/// Produces follow-up questions or the completion message.
pub struct DialogueController {
    ai_provider: Arc<dyn AIProvider>,
}

impl DialogueController {
    pub fn new(ai_provider: Arc<dyn AIProvider>) -> Self {
        Self { ai_provider }
    }

    /// Computes the next assistant turn and appends it to `conversation`.
    pub async fn next_turn(&self, conversation: &mut Conversation) -> TurnReply {
        let missing = conversation.missing_required_fields();

        let reply = match NextTurn::plan(&missing) {
            NextTurn::Complete => TurnReply {
                message: COMPLETION_MESSAGE.to_string(),
                all_required_collected: true,
            },
            NextTurn::AskFor(fields) => TurnReply {
                message: self.ask_for(conversation, &fields).await,
                all_required_collected: false,
            },
        };

        conversation.record_assistant_message(reply.message.clone());
        reply
    }

    async fn ask_for(&self, conversation: &Conversation, fields: &[String]) -> String {
        let prompt = follow_up_prompt(
            conversation.form(),
            conversation.messages(),
            conversation.extracted_data(),
            fields,
        );

        let request = CompletionRequest::new(
            RequestMetadata::new(CompletionPurpose::FollowUp).for_conversation(conversation.id()),
        )
        .with_system_prompt(prompt.system)
        .with_message(MessageRole::User, prompt.user)
        .with_temperature(FOLLOW_UP_TEMPERATURE)
        .with_max_tokens(FOLLOW_UP_MAX_TOKENS);

        match self.ai_provider.complete(request).await {
            Ok(response) if !response.content.trim().is_empty() => {
                response.content.trim().to_string()
            }
            Ok(_) => {
                tracing::warn!(
                    conversation_id = %conversation.id(),
                    "Follow-up response was blank; using templated question"
                );
                fallback_question(fields)
            }
            Err(err) => {
                tracing::warn!(
                    conversation_id = %conversation.id(),
                    error = %err,
                    "Follow-up request failed; using templated question"
                );
                fallback_question(fields)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};
    use crate::domain::conversation::{Role, MAX_FIELDS_PER_TURN};
    use crate::domain::form::{FieldSpec, FieldType, FormSchema};
    use serde_json::json;

    fn form_with_required(count: usize) -> FormSchema {
        FormSchema::new(
            "Long Form",
            (1..=count)
                .map(|i| FieldSpec::required(format!("Field {:02}", i), FieldType::String))
                .collect(),
        )
    }

    #[tokio::test]
    async fn complete_form_gets_completion_message_without_model_call() {
        let provider = Arc::new(MockAIProvider::new());
        let controller = DialogueController::new(provider.clone());
        let mut conversation = Conversation::start(form_with_required(1)).unwrap();
        conversation.apply_extraction(json!({"Field 01": "x"}).as_object().unwrap());

        let reply = controller.next_turn(&mut conversation).await;

        assert!(reply.all_required_collected);
        assert_eq!(reply.message, COMPLETION_MESSAGE);
        assert_eq!(provider.call_count(), 0);
        assert_eq!(
            conversation.last_message().map(|m| m.content()),
            Some(COMPLETION_MESSAGE)
        );
    }

    #[tokio::test]
    async fn follow_up_uses_model_reply() {
        let provider = Arc::new(MockAIProvider::new().with_response("  Thanks! What's your Field 01?  "));
        let controller = DialogueController::new(provider.clone());
        let mut conversation = Conversation::start(form_with_required(2)).unwrap();

        let reply = controller.next_turn(&mut conversation).await;

        assert!(!reply.all_required_collected);
        assert_eq!(reply.message, "Thanks! What's your Field 01?");
        let last = conversation.last_message().unwrap();
        assert_eq!(last.role(), Role::Assistant);
        assert_eq!(last.content(), reply.message);

        let call = provider.last_call().unwrap();
        assert_eq!(call.temperature, Some(FOLLOW_UP_TEMPERATURE));
        assert_eq!(call.max_tokens, Some(FOLLOW_UP_MAX_TOKENS));
    }

    #[tokio::test]
    async fn follow_up_names_only_first_five_missing_fields() {
        let provider = Arc::new(MockAIProvider::new().with_response("Could you share a few details?"));
        let controller = DialogueController::new(provider.clone());
        let mut conversation = Conversation::start(form_with_required(8)).unwrap();

        controller.next_turn(&mut conversation).await;

        let prompt = provider.last_call().unwrap().prompt_text();
        let named = (1..=8)
            .filter(|i| prompt.contains(&format!("Field {:02}", i)))
            .count();
        assert_eq!(named, MAX_FIELDS_PER_TURN);
        assert!(prompt.contains("Field 05"));
        assert!(!prompt.contains("Field 06"));
    }

    #[tokio::test]
    async fn provider_failure_falls_back_to_template() {
        let provider = Arc::new(MockAIProvider::new().with_error(MockError::Timeout { timeout_secs: 30 }));
        let controller = DialogueController::new(provider);
        let mut conversation = Conversation::start(form_with_required(2)).unwrap();

        let reply = controller.next_turn(&mut conversation).await;

        assert_eq!(reply.message, "Could you provide your Field 01, Field 02?");
        assert!(!reply.all_required_collected);
    }

    #[tokio::test]
    async fn blank_model_reply_falls_back_to_template() {
        let provider = Arc::new(MockAIProvider::new().with_response("   "));
        let controller = DialogueController::new(provider);
        let mut conversation = Conversation::start(form_with_required(1)).unwrap();

        let reply = controller.next_turn(&mut conversation).await;

        assert_eq!(reply.message, "Could you provide your Field 01?");
    }
}
