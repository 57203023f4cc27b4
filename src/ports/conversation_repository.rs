//! Conversation repository port.
//!
//! Defines the contract for persisting and retrieving Conversation aggregates.
//!
//! # Concurrency
//!
//! Handlers load a copy of a conversation, mutate it and save it back.
//! Two turns racing on the same conversation are last-writer-wins; no
//! optimistic locking is performed.

use async_trait::async_trait;

use crate::domain::conversation::Conversation;
use crate::domain::foundation::{ConversationId, DomainError};

/// Repository port for Conversation aggregate persistence.
#[async_trait]
pub trait ConversationRepository: Send + Sync {
    /// Insert or replace a conversation.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn save(&self, conversation: &Conversation) -> Result<(), DomainError>;

    /// Find a conversation by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &ConversationId) -> Result<Option<Conversation>, DomainError>;

    /// Number of stored conversations.
    async fn count(&self) -> Result<usize, DomainError>;
}
