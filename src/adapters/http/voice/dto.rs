//! HTTP DTOs for voice endpoints.

use serde::{Deserialize, Serialize};

use crate::adapters::http::form::FormRequest;
use crate::application::handlers::ProcessSpeechResult;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to open a conversation for a form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StartConversationRequest {
    #[serde(default)]
    pub form: Option<FormRequest>,
}

/// One user utterance.
///
/// Missing members decode as empty strings and are rejected by the handler
/// with the same messages as blank values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProcessSpeechRequest {
    #[serde(default)]
    pub conversation_id: String,
    #[serde(default)]
    pub text: String,
}

/// Text to synthesize.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TtsRequest {
    #[serde(default)]
    pub text: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct StartConversationResponse {
    pub conversation_id: String,
    pub message: String,
    pub success: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProcessSpeechResponse {
    pub response: String,
    pub extracted_data: serde_json::Map<String, serde_json::Value>,
    pub all_required_collected: bool,
    pub success: bool,
}

impl From<ProcessSpeechResult> for ProcessSpeechResponse {
    fn from(result: ProcessSpeechResult) -> Self {
        Self {
            response: result.response,
            extracted_data: result.extracted_data.as_map().clone(),
            all_required_collected: result.all_required_collected,
            success: true,
        }
    }
}

/// Base64-encoded WAV audio.
#[derive(Debug, Clone, Serialize)]
pub struct TtsResponse {
    pub audio_data: String,
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_request_without_form_decodes_to_none() {
        let req: StartConversationRequest = serde_json::from_str("{}").unwrap();
        assert!(req.form.is_none());

        let req: StartConversationRequest = serde_json::from_str(r#"{"form": null}"#).unwrap();
        assert!(req.form.is_none());
    }

    #[test]
    fn process_request_defaults_to_empty_strings() {
        let req: ProcessSpeechRequest = serde_json::from_str(r#"{"text": "hi"}"#).unwrap();
        assert!(req.conversation_id.is_empty());
        assert_eq!(req.text, "hi");
    }
}
