//! Mock Speech Synthesizer for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::ports::{SpeechError, SpeechSynthesizer, SynthesizedAudio};

/// Mock synthesizer that returns fixed audio or a configured failure.
#[derive(Debug, Clone)]
pub struct MockSpeechSynthesizer {
    audio: Vec<u8>,
    fail_with_status: Option<u16>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl Default for MockSpeechSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockSpeechSynthesizer {
    /// Creates a synthesizer returning a small fake WAV payload.
    pub fn new() -> Self {
        Self {
            audio: b"RIFF\0\0\0\0WAVEfmt ".to_vec(),
            fail_with_status: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Sets the audio bytes returned on success.
    pub fn with_audio(mut self, audio: Vec<u8>) -> Self {
        self.audio = audio;
        self
    }

    /// Makes every call fail as if the service answered with `status`.
    pub fn failing(mut self, status: u16) -> Self {
        self.fail_with_status = Some(status);
        self
    }

    /// Texts passed to `synthesize`, in call order.
    pub fn get_calls(&self) -> Vec<String> {
        lock(&self.calls).clone()
    }

    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }
}

#[async_trait]
impl SpeechSynthesizer for MockSpeechSynthesizer {
    async fn synthesize(&self, text: &str) -> Result<SynthesizedAudio, SpeechError> {
        lock(&self.calls).push(text.to_string());

        match self.fail_with_status {
            Some(status) => Err(SpeechError::synthesis_failed(status, "mock failure")),
            None => Ok(SynthesizedAudio::wav(self.audio.clone())),
        }
    }

    fn voice(&self) -> &str {
        "mock-voice"
    }
}
