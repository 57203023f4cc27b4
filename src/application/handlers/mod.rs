//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod conversation;
pub mod form;
pub mod speech;
pub mod submission;

pub use conversation::{
    ProcessSpeechCommand, ProcessSpeechError, ProcessSpeechHandler, ProcessSpeechResult,
    StartConversationCommand, StartConversationError, StartConversationHandler,
    StartConversationResult,
};
pub use form::{
    GetActiveFormHandler, ListFormsHandler, RegisterFormCommand, RegisterFormError,
    RegisterFormHandler, RegisterFormResult,
};
pub use speech::{SynthesizeSpeechCommand, SynthesizeSpeechError, SynthesizeSpeechHandler};
pub use submission::{SubmitFormCommand, SubmitFormHandler, SubmitFormResult};
