//! ProcessSpeechHandler - Command handler for one user turn.
//!
//! A turn records the user's text, merges whatever the model extracts from
//! it, then appends the assistant's follow-up (or the completion message).
//! Collaborator failures degrade the turn instead of aborting it.

use std::sync::Arc;
use thiserror::Error;

use crate::application::services::{DialogueController, ExtractionEngine};
use crate::domain::conversation::ExtractedData;
use crate::domain::foundation::{ConversationId, DomainError};
use crate::ports::ConversationRepository;

/// Command carrying one user utterance.
#[derive(Debug, Clone)]
pub struct ProcessSpeechCommand {
    /// Conversation id as received from the client.
    pub conversation_id: String,
    /// Transcribed or typed user text.
    pub text: String,
}

/// Result of a processed turn.
#[derive(Debug, Clone)]
pub struct ProcessSpeechResult {
    pub response: String,
    pub extracted_data: ExtractedData,
    pub all_required_collected: bool,
}

/// Errors that can occur when processing a turn.
#[derive(Debug, Clone, Error)]
pub enum ProcessSpeechError {
    /// The id is malformed or names no conversation.
    #[error("Invalid conversation ID")]
    InvalidConversationId,

    /// The text is empty or whitespace only.
    #[error("No text provided")]
    EmptyText,

    /// Repository error during load or save.
    #[error("Repository error: {0}")]
    Repository(#[from] DomainError),
}

/// Handler for processing user turns.
pub struct ProcessSpeechHandler {
    conversations: Arc<dyn ConversationRepository>,
    extraction: ExtractionEngine,
    dialogue: DialogueController,
}

impl ProcessSpeechHandler {
    pub fn new(
        conversations: Arc<dyn ConversationRepository>,
        extraction: ExtractionEngine,
        dialogue: DialogueController,
    ) -> Self {
        Self {
            conversations,
            extraction,
            dialogue,
        }
    }

    pub async fn handle(
        &self,
        cmd: ProcessSpeechCommand,
    ) -> Result<ProcessSpeechResult, ProcessSpeechError> {
        let id: ConversationId = cmd
            .conversation_id
            .trim()
            .parse()
            .map_err(|_| ProcessSpeechError::InvalidConversationId)?;

        let mut conversation = self
            .conversations
            .find_by_id(&id)
            .await?
            .ok_or(ProcessSpeechError::InvalidConversationId)?;

        let text = cmd.text.trim();
        if text.is_empty() {
            return Err(ProcessSpeechError::EmptyText);
        }

        conversation.record_user_message(text);

        let partial = self.extraction.extract(&conversation, text).await;
        let outcome = conversation.apply_extraction(&partial);
        tracing::debug!(
            conversation_id = %id,
            added = ?outcome.added,
            updated = ?outcome.updated,
            ignored = ?outcome.ignored,
            "Merged extracted values"
        );

        let reply = self.dialogue.next_turn(&mut conversation).await;

        self.conversations.save(&conversation).await?;

        if reply.all_required_collected {
            tracing::info!(
                conversation_id = %id,
                started_at = %conversation.created_at(),
                "All required fields collected"
            );
        }

        Ok(ProcessSpeechResult {
            response: reply.message,
            extracted_data: conversation.extracted_data().clone(),
            all_required_collected: reply.all_required_collected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};
    use crate::adapters::storage::InMemoryConversationRepository;
    use crate::domain::conversation::{Conversation, Role, COMPLETION_MESSAGE};
    use crate::domain::form::{FieldSpec, FieldType, FormSchema};

    struct Fixture {
        repo: Arc<InMemoryConversationRepository>,
        provider: Arc<MockAIProvider>,
        handler: ProcessSpeechHandler,
        conversation_id: ConversationId,
    }

    async fn fixture(provider: MockAIProvider) -> Fixture {
        let repo = Arc::new(InMemoryConversationRepository::new());
        let provider = Arc::new(provider);
        let conversation = Conversation::start(FormSchema::new(
            "Contact Form",
            vec![
                FieldSpec::required("Name", FieldType::String),
                FieldSpec::required("Phone", FieldType::Phone),
            ],
        ))
        .unwrap();
        repo.save(&conversation).await.unwrap();

        let handler = ProcessSpeechHandler::new(
            repo.clone(),
            ExtractionEngine::new(provider.clone()),
            DialogueController::new(provider.clone()),
        );

        Fixture {
            repo,
            provider,
            handler,
            conversation_id: conversation.id(),
        }
    }

    fn command(id: impl ToString, text: &str) -> ProcessSpeechCommand {
        ProcessSpeechCommand {
            conversation_id: id.to_string(),
            text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn name_then_phone_completes_the_form() {
        let f = fixture(
            MockAIProvider::new()
                .with_response(r#"{"Name": "Asha"}"#)
                .with_response("Thanks, Asha! Could you share your phone number?")
                .with_response(r#"{"Phone": "9876543210"}"#),
        )
        .await;

        let first = f
            .handler
            .handle(command(f.conversation_id, "My name is Asha"))
            .await
            .unwrap();

        assert!(!first.all_required_collected);
        assert_eq!(first.extracted_data.get("Name"), Some("Asha"));
        assert_eq!(first.response, "Thanks, Asha! Could you share your phone number?");

        let second = f
            .handler
            .handle(command(f.conversation_id, "98765 43210"))
            .await
            .unwrap();

        assert!(second.all_required_collected);
        assert_eq!(second.response, COMPLETION_MESSAGE);
        assert_eq!(second.extracted_data.get("Name"), Some("Asha"));
        assert_eq!(second.extracted_data.get("Phone"), Some("9876543210"));
        // Completion needs no follow-up call.
        assert_eq!(f.provider.call_count(), 3);

        let stored = f.repo.find_by_id(&f.conversation_id).await.unwrap().unwrap();
        let roles: Vec<_> = stored.messages().iter().map(|m| m.role()).collect();
        assert_eq!(
            roles,
            vec![Role::Assistant, Role::User, Role::Assistant, Role::User, Role::Assistant]
        );
        assert_eq!(stored.messages()[3].content(), "98765 43210");
    }

    #[tokio::test]
    async fn extraction_failure_still_asks_a_question() {
        let f = fixture(
            MockAIProvider::new()
                .with_error(MockError::Network {
                    message: "reset".to_string(),
                })
                .with_error(MockError::Network {
                    message: "reset".to_string(),
                }),
        )
        .await;

        let result = f
            .handler
            .handle(command(f.conversation_id, "hello"))
            .await
            .unwrap();

        assert!(result.extracted_data.is_empty());
        assert_eq!(result.response, "Could you provide your Name, Phone?");
        assert!(!result.all_required_collected);
    }

    #[tokio::test]
    async fn repeated_identical_extraction_is_idempotent() {
        let f = fixture(
            MockAIProvider::new()
                .with_response(r#"{"Name": "Asha"}"#)
                .with_response("What's your phone?")
                .with_response(r#"{"Name": "Asha"}"#)
                .with_response("What's your phone?"),
        )
        .await;

        let first = f.handler.handle(command(f.conversation_id, "I'm Asha")).await.unwrap();
        let second = f.handler.handle(command(f.conversation_id, "I'm Asha")).await.unwrap();

        assert_eq!(first.extracted_data, second.extracted_data);
    }

    #[tokio::test]
    async fn unknown_conversation_is_rejected_without_model_calls() {
        let f = fixture(MockAIProvider::new()).await;

        let result = f.handler.handle(command(ConversationId::new(), "hi")).await;

        assert!(matches!(result, Err(ProcessSpeechError::InvalidConversationId)));
        assert_eq!(f.provider.call_count(), 0);
    }

    #[tokio::test]
    async fn malformed_id_is_rejected() {
        let f = fixture(MockAIProvider::new()).await;

        let result = f.handler.handle(command("not-a-uuid", "hi")).await;

        assert!(matches!(result, Err(ProcessSpeechError::InvalidConversationId)));
    }

    #[tokio::test]
    async fn blank_text_is_rejected_without_mutation() {
        let f = fixture(MockAIProvider::new()).await;

        let result = f.handler.handle(command(f.conversation_id, "   ")).await;

        assert!(matches!(result, Err(ProcessSpeechError::EmptyText)));
        let stored = f.repo.find_by_id(&f.conversation_id).await.unwrap().unwrap();
        assert_eq!(stored.messages().len(), 1);
        assert_eq!(f.provider.call_count(), 0);
    }
}
