//! Storage adapters.
//!
//! In-memory implementations of the repository ports.

mod in_memory_conversation_repository;
mod in_memory_form_repository;

pub use in_memory_conversation_repository::InMemoryConversationRepository;
pub use in_memory_form_repository::InMemoryFormRepository;
