//! Azure Speech Synthesizer - Implementation of SpeechSynthesizer for Azure's TTS REST API.
//!
//! Sends SSML to the regional `cognitiveservices/v1` endpoint and returns
//! the encoded audio body.
//!
//! # Configuration
//!
//! ```ignore
//! let config = AzureSpeechConfig::new(subscription_key, "centralindia")
//!     .with_voice("en-IN-AartiIndicNeural");
//!
//! let synthesizer = AzureSpeechSynthesizer::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use std::time::Duration;

use crate::ports::{SpeechError, SpeechSynthesizer, SynthesizedAudio};

/// Default neural voice.
pub const DEFAULT_VOICE: &str = "en-IN-AartiIndicNeural";

/// Default output format: 24kHz 16-bit mono PCM in a RIFF (WAV) container.
pub const DEFAULT_OUTPUT_FORMAT: &str = "riff-24khz-16bit-mono-pcm";

/// Configuration for the Azure speech synthesizer.
#[derive(Debug, Clone)]
pub struct AzureSpeechConfig {
    /// Speech resource subscription key.
    subscription_key: Secret<String>,
    /// Azure region, e.g. "centralindia".
    pub region: String,
    /// Voice name.
    pub voice: String,
    /// Value of the `X-Microsoft-OutputFormat` header.
    pub output_format: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Endpoint override (defaults to the regional TTS endpoint).
    pub endpoint: Option<String>,
}

impl AzureSpeechConfig {
    /// Creates a new configuration for `region`.
    pub fn new(subscription_key: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            subscription_key: Secret::new(subscription_key.into()),
            region: region.into(),
            voice: DEFAULT_VOICE.to_string(),
            output_format: DEFAULT_OUTPUT_FORMAT.to_string(),
            timeout: Duration::from_secs(30),
            endpoint: None,
        }
    }

    /// Sets the voice.
    pub fn with_voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = voice.into();
        self
    }

    /// Sets the output format.
    pub fn with_output_format(mut self, format: impl Into<String>) -> Self {
        self.output_format = format.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Overrides the synthesis endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    fn subscription_key(&self) -> &str {
        self.subscription_key.expose_secret()
    }
}

/// Azure Speech REST synthesizer.
pub struct AzureSpeechSynthesizer {
    config: AzureSpeechConfig,
    client: Client,
}

impl AzureSpeechSynthesizer {
    /// Creates a new synthesizer.
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Network` if the HTTP client cannot be built.
    pub fn new(config: AzureSpeechConfig) -> Result<Self, SpeechError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SpeechError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn synthesis_url(&self) -> String {
        match &self.config.endpoint {
            Some(endpoint) => endpoint.clone(),
            None => format!(
                "https://{}.tts.speech.microsoft.com/cognitiveservices/v1",
                self.config.region
            ),
        }
    }

    /// Wraps text in a single-voice SSML document.
    fn build_ssml(&self, text: &str) -> String {
        format!(
            "<speak version='1.0' xml:lang='{lang}'><voice name='{voice}'>{text}</voice></speak>",
            lang = voice_locale(&self.config.voice),
            voice = escape_xml(&self.config.voice),
            text = escape_xml(text),
        )
    }
}

#[async_trait]
impl SpeechSynthesizer for AzureSpeechSynthesizer {
    async fn synthesize(&self, text: &str) -> Result<SynthesizedAudio, SpeechError> {
        tracing::debug!(
            voice = %self.config.voice,
            chars = text.chars().count(),
            "Sending speech synthesis request"
        );

        let response = self
            .client
            .post(self.synthesis_url())
            .header("Ocp-Apim-Subscription-Key", self.config.subscription_key())
            .header("Content-Type", "application/ssml+xml")
            .header("X-Microsoft-OutputFormat", &self.config.output_format)
            .header("User-Agent", "autoform")
            .body(self.build_ssml(text))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SpeechError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else {
                    SpeechError::network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 | 403 => SpeechError::AuthenticationFailed,
                code => SpeechError::synthesis_failed(code, body),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SpeechError::network(format!("Failed to read audio: {}", e)))?;
        if bytes.is_empty() {
            return Err(SpeechError::EmptyAudio);
        }

        Ok(SynthesizedAudio::wav(bytes.to_vec()))
    }

    fn voice(&self) -> &str {
        &self.config.voice
    }
}

/// Locale prefix of a voice name ("en-IN-AartiIndicNeural" → "en-IN").
fn voice_locale(voice: &str) -> String {
    let parts: Vec<&str> = voice.splitn(3, '-').collect();
    match parts.as_slice() {
        [lang, region, _] => format!("{}-{}", lang, region),
        _ => "en-US".to_string(),
    }
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}
