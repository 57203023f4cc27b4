//! HTTP adapter for the voice conversation endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ProcessSpeechRequest, ProcessSpeechResponse, StartConversationRequest,
    StartConversationResponse, TtsRequest, TtsResponse,
};
pub use handlers::{process_speech, start_conversation, text_to_speech};
pub use routes::voice_router;
