//! StartConversationHandler - Command handler for opening a form-filling conversation.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::conversation::Conversation;
use crate::domain::form::FormSchema;
use crate::domain::foundation::{ConversationId, DomainError, ValidationError};
use crate::ports::ConversationRepository;

/// Command to start a conversation for a form.
#[derive(Debug, Clone)]
pub struct StartConversationCommand {
    /// Schema to fill. `None` when the request carried no form.
    pub form: Option<FormSchema>,
}

/// Result of starting a conversation.
#[derive(Debug, Clone)]
pub struct StartConversationResult {
    pub conversation_id: ConversationId,
    pub greeting: String,
}

/// Errors that can occur when starting a conversation.
#[derive(Debug, Clone, Error)]
pub enum StartConversationError {
    /// No form schema was supplied.
    #[error("No form provided")]
    MissingForm,

    /// The supplied schema is not usable.
    #[error("Invalid form: {0}")]
    InvalidForm(#[from] ValidationError),

    /// Repository error during persistence.
    #[error("Repository error: {0}")]
    Repository(#[from] DomainError),
}

/// Handler for starting conversations.
pub struct StartConversationHandler {
    conversations: Arc<dyn ConversationRepository>,
}

impl StartConversationHandler {
    pub fn new(conversations: Arc<dyn ConversationRepository>) -> Self {
        Self { conversations }
    }

    pub async fn handle(
        &self,
        cmd: StartConversationCommand,
    ) -> Result<StartConversationResult, StartConversationError> {
        let form = cmd.form.ok_or(StartConversationError::MissingForm)?;
        let conversation = Conversation::start(form)?;

        self.conversations.save(&conversation).await?;
        let stored = self.conversations.count().await?;

        tracing::info!(
            conversation_id = %conversation.id(),
            form = %conversation.form().title,
            conversations = stored,
            "Conversation started"
        );

        Ok(StartConversationResult {
            conversation_id: conversation.id(),
            greeting: conversation.greeting().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryConversationRepository;
    use crate::domain::conversation::Role;
    use crate::domain::form::{FieldSpec, FieldType};

    fn schema() -> FormSchema {
        FormSchema::new(
            "Contact Form",
            vec![FieldSpec::required("Name", FieldType::String)],
        )
    }

    #[tokio::test]
    async fn stores_conversation_with_greeting() {
        let repo = Arc::new(InMemoryConversationRepository::new());
        let handler = StartConversationHandler::new(repo.clone());

        let result = handler
            .handle(StartConversationCommand { form: Some(schema()) })
            .await
            .unwrap();

        assert!(result.greeting.starts_with("Hello! I’ll help you complete your Contact Form."));
        let stored = repo.find_by_id(&result.conversation_id).await.unwrap().unwrap();
        assert_eq!(stored.messages().len(), 1);
        assert_eq!(stored.messages()[0].role(), Role::Assistant);
        assert_eq!(stored.messages()[0].content(), result.greeting);
        assert!(stored.extracted_data().is_empty());
    }

    #[tokio::test]
    async fn missing_form_is_rejected_without_storing() {
        let repo = Arc::new(InMemoryConversationRepository::new());
        let handler = StartConversationHandler::new(repo.clone());

        let result = handler.handle(StartConversationCommand { form: None }).await;

        assert!(matches!(result, Err(StartConversationError::MissingForm)));
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn invalid_form_is_rejected() {
        let handler = StartConversationHandler::new(Arc::new(InMemoryConversationRepository::new()));

        let result = handler
            .handle(StartConversationCommand {
                form: Some(FormSchema::new("", vec![])),
            })
            .await;

        assert!(matches!(result, Err(StartConversationError::InvalidForm(_))));
    }

    #[tokio::test]
    async fn each_conversation_gets_a_distinct_id() {
        let handler = StartConversationHandler::new(Arc::new(InMemoryConversationRepository::new()));
        let a = handler.handle(StartConversationCommand { form: Some(schema()) }).await.unwrap();
        let b = handler.handle(StartConversationCommand { form: Some(schema()) }).await.unwrap();
        assert_ne!(a.conversation_id, b.conversation_id);
    }
}
