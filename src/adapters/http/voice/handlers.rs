//! HTTP handlers for voice endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::adapters::http::{ApiError, AppState};
use crate::application::handlers::{
    ProcessSpeechCommand, StartConversationCommand, SynthesizeSpeechCommand,
};

use super::dto::{
    ProcessSpeechRequest, ProcessSpeechResponse, StartConversationRequest,
    StartConversationResponse, TtsRequest, TtsResponse,
};

/// POST /api/voice/start-conversation - Open a conversation for the given form
pub async fn start_conversation(
    State(state): State<AppState>,
    payload: Result<Json<StartConversationRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;

    let cmd = StartConversationCommand {
        form: request.form.map(Into::into),
    };
    let result = state.start_conversation_handler().handle(cmd).await?;

    Ok(Json(StartConversationResponse {
        conversation_id: result.conversation_id.to_string(),
        message: result.greeting,
        success: true,
    }))
}

/// POST /api/voice/process-speech - Run one user turn
pub async fn process_speech(
    State(state): State<AppState>,
    payload: Result<Json<ProcessSpeechRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;

    let cmd = ProcessSpeechCommand {
        conversation_id: request.conversation_id,
        text: request.text,
    };
    let result = state.process_speech_handler().handle(cmd).await?;

    Ok(Json(ProcessSpeechResponse::from(result)))
}

/// POST /api/voice/tts - Synthesize audio for a piece of text
pub async fn text_to_speech(
    State(state): State<AppState>,
    payload: Result<Json<TtsRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;

    let cmd = SynthesizeSpeechCommand { text: request.text };
    let audio = state.synthesize_speech_handler().handle(cmd).await?;

    Ok(Json(TtsResponse {
        audio_data: STANDARD.encode(&audio.data),
        success: true,
    }))
}
