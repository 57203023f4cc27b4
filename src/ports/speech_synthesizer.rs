//! Speech Synthesizer Port - Interface for text-to-speech services.
//!
//! Converts assistant text into playable audio. Implementations reach an
//! external speech service; a mock is provided for tests.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Port for text-to-speech synthesis.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize `text` with the configured voice.
    ///
    /// Callers are expected to reject blank text before calling.
    async fn synthesize(&self, text: &str) -> Result<SynthesizedAudio, SpeechError>;

    /// Name of the voice used for synthesis.
    fn voice(&self) -> &str;
}

/// Encoded audio returned by a synthesizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesizedAudio {
    /// Raw encoded bytes (e.g. a RIFF/WAV file).
    pub data: Vec<u8>,
    /// MIME type of `data`.
    pub content_type: String,
}

impl SynthesizedAudio {
    /// Creates WAV audio from raw bytes.
    pub fn wav(data: Vec<u8>) -> Self {
        Self {
            data,
            content_type: "audio/wav".to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Errors from speech synthesis.
#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    /// The service answered with a non-success status.
    #[error("speech synthesis failed ({status}): {message}")]
    SynthesisFailed {
        /// HTTP status returned by the service.
        status: u16,
        /// Error detail from the service, if any.
        message: String,
    },

    /// Authentication failed (invalid subscription key).
    #[error("speech authentication failed")]
    AuthenticationFailed,

    /// The service returned no audio.
    #[error("speech service returned empty audio")]
    EmptyAudio,

    /// Network error.
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("speech request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u32,
    },
}

impl SpeechError {
    /// Creates a synthesis failure.
    pub fn synthesis_failed(status: u16, message: impl Into<String>) -> Self {
        Self::SynthesisFailed {
            status,
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wav_audio_has_wav_content_type() {
        let audio = SynthesizedAudio::wav(vec![1, 2, 3]);
        assert_eq!(audio.content_type, "audio/wav");
        assert_eq!(audio.len(), 3);
        assert!(!audio.is_empty());
    }

    #[test]
    fn speech_error_displays_status() {
        let err = SpeechError::synthesis_failed(400, "bad ssml");
        assert_eq!(err.to_string(), "speech synthesis failed (400): bad ssml");
    }
}
