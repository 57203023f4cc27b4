//! SynthesizeSpeechHandler - Command handler for text-to-speech.

use std::sync::Arc;
use thiserror::Error;

use crate::ports::{SpeechError, SpeechSynthesizer, SynthesizedAudio};

/// Command to synthesize audio for a piece of text.
#[derive(Debug, Clone)]
pub struct SynthesizeSpeechCommand {
    pub text: String,
}

/// Errors that can occur when synthesizing speech.
#[derive(Debug, Error)]
pub enum SynthesizeSpeechError {
    /// The text is empty or whitespace only.
    #[error("No text provided")]
    EmptyText,

    /// The speech service failed.
    #[error("Speech synthesis failed: {0}")]
    Synthesis(#[from] SpeechError),
}

/// Handler for speech synthesis.
pub struct SynthesizeSpeechHandler {
    synthesizer: Arc<dyn SpeechSynthesizer>,
}

impl SynthesizeSpeechHandler {
    pub fn new(synthesizer: Arc<dyn SpeechSynthesizer>) -> Self {
        Self { synthesizer }
    }

    pub async fn handle(
        &self,
        cmd: SynthesizeSpeechCommand,
    ) -> Result<SynthesizedAudio, SynthesizeSpeechError> {
        if cmd.text.trim().is_empty() {
            return Err(SynthesizeSpeechError::EmptyText);
        }

        let audio = self.synthesizer.synthesize(&cmd.text).await.map_err(|err| {
            tracing::error!(error = %err, voice = %self.synthesizer.voice(), "Speech synthesis failed");
            err
        })?;

        tracing::debug!(bytes = audio.len(), "Speech synthesized");
        Ok(audio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::speech::MockSpeechSynthesizer;

    #[tokio::test]
    async fn returns_synthesized_audio() {
        let synth = Arc::new(MockSpeechSynthesizer::new().with_audio(vec![7, 7, 7]));
        let handler = SynthesizeSpeechHandler::new(synth.clone());

        let audio = handler
            .handle(SynthesizeSpeechCommand {
                text: "Hello there".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(audio.data, vec![7, 7, 7]);
        assert_eq!(synth.get_calls(), vec!["Hello there"]);
    }

    #[tokio::test]
    async fn blank_text_is_rejected_before_calling_service() {
        let synth = Arc::new(MockSpeechSynthesizer::new());
        let handler = SynthesizeSpeechHandler::new(synth.clone());

        let result = handler
            .handle(SynthesizeSpeechCommand {
                text: "  ".to_string(),
            })
            .await;

        assert!(matches!(result, Err(SynthesizeSpeechError::EmptyText)));
        assert_eq!(synth.call_count(), 0);
    }

    #[tokio::test]
    async fn service_failure_is_surfaced() {
        let handler = SynthesizeSpeechHandler::new(Arc::new(MockSpeechSynthesizer::new().failing(500)));

        let result = handler
            .handle(SynthesizeSpeechCommand {
                text: "Hello".to_string(),
            })
            .await;

        assert!(matches!(result, Err(SynthesizeSpeechError::Synthesis(_))));
    }
}
