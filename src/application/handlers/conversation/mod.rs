//! Conversation command handlers.

mod process_speech;
mod start_conversation;

pub use process_speech::{
    ProcessSpeechCommand, ProcessSpeechError, ProcessSpeechHandler, ProcessSpeechResult,
};
pub use start_conversation::{
    StartConversationCommand, StartConversationError, StartConversationHandler,
    StartConversationResult,
};
