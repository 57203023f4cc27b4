//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Handlers are one per use case; `services` holds the extraction and
//! dialogue logic shared by the conversation handlers.

pub mod handlers;
pub mod services;

pub use handlers::{
    // Form handlers
    GetActiveFormHandler, ListFormsHandler, RegisterFormCommand, RegisterFormError,
    RegisterFormHandler, RegisterFormResult,
    // Conversation handlers
    ProcessSpeechCommand, ProcessSpeechError, ProcessSpeechHandler, ProcessSpeechResult,
    StartConversationCommand, StartConversationError, StartConversationHandler,
    StartConversationResult,
    // Speech and submission handlers
    SubmitFormCommand, SubmitFormHandler, SubmitFormResult, SynthesizeSpeechCommand,
    SynthesizeSpeechError, SynthesizeSpeechHandler,
};
pub use services::{DialogueController, ExtractionEngine, TurnReply};
