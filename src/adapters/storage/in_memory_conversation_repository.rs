//! In-Memory Conversation Repository Adapter
//!
//! Stores conversation aggregates in memory. Conversations are never
//! evicted; they live for the lifetime of the process.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::conversation::Conversation;
use crate::domain::foundation::{ConversationId, DomainError};
use crate::ports::ConversationRepository;

/// In-memory storage for conversations
#[derive(Debug, Clone, Default)]
pub struct InMemoryConversationRepository {
    conversations: Arc<RwLock<HashMap<ConversationId, Conversation>>>,
}

impl InMemoryConversationRepository {
    /// Create a new in-memory repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConversationRepository for InMemoryConversationRepository {
    async fn save(&self, conversation: &Conversation) -> Result<(), DomainError> {
        let mut conversations = self.conversations.write().await;
        conversations.insert(conversation.id(), conversation.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &ConversationId) -> Result<Option<Conversation>, DomainError> {
        let conversations = self.conversations.read().await;
        Ok(conversations.get(id).cloned())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.conversations.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::form::{FieldSpec, FieldType, FormSchema};

    fn conversation() -> Conversation {
        Conversation::start(FormSchema::new(
            "Contact Form",
            vec![FieldSpec::required("Name", FieldType::String)],
        ))
        .unwrap()
    }

    #[tokio::test]
    async fn save_and_find_round_trip() {
        let repo = InMemoryConversationRepository::new();
        let conversation = conversation();

        repo.save(&conversation).await.unwrap();

        let found = repo.find_by_id(&conversation.id()).await.unwrap();
        assert_eq!(found, Some(conversation));
    }

    #[tokio::test]
    async fn unknown_id_returns_none() {
        let repo = InMemoryConversationRepository::new();
        assert!(repo.find_by_id(&ConversationId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_replaces_existing_conversation() {
        let repo = InMemoryConversationRepository::new();
        let mut conversation = conversation();
        repo.save(&conversation).await.unwrap();

        conversation.record_user_message("I am Asha");
        repo.save(&conversation).await.unwrap();

        let found = repo.find_by_id(&conversation.id()).await.unwrap().unwrap();
        assert_eq!(found.messages().len(), 2);
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
