//! Route configuration for voice endpoints.

use axum::routing::post;
use axum::Router;

use super::handlers::{process_speech, start_conversation, text_to_speech};
use crate::adapters::http::AppState;

/// Creates the voice router.
///
/// Routes:
/// - `POST /api/voice/start-conversation` - Open a conversation, returns the greeting
/// - `POST /api/voice/process-speech` - Extract values from one utterance and reply
/// - `POST /api/voice/tts` - Base64 WAV audio for a piece of text
pub fn voice_router() -> Router<AppState> {
    Router::new()
        .route("/api/voice/start-conversation", post(start_conversation))
        .route("/api/voice/process-speech", post(process_speech))
        .route("/api/voice/tts", post(text_to_speech))
}
