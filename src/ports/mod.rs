//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Collaborator Ports
//!
//! - `AIProvider` - Chat-completion language model
//! - `SpeechSynthesizer` - Text-to-speech service
//!
//! ## Storage Ports
//!
//! - `FormRepository` - Registered form schemas and the active form
//! - `ConversationRepository` - Conversation aggregates

mod ai_provider;
mod conversation_repository;
mod form_repository;
mod speech_synthesizer;

pub use ai_provider::{
    AIError, AIProvider, CompletionPurpose, CompletionRequest, CompletionResponse, FinishReason,
    Message, MessageRole, ProviderInfo, RequestMetadata, TokenUsage,
};
pub use conversation_repository::ConversationRepository;
pub use form_repository::{FormRepository, StoredForm};
pub use speech_synthesizer::{SpeechError, SpeechSynthesizer, SynthesizedAudio};
