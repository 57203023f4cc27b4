//! Speech synthesis configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::ai::is_http_url;
use super::error::ValidationError;

/// Azure Speech configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SpeechConfig {
    /// Speech resource subscription key
    pub subscription_key: Option<Secret<String>>,

    /// Azure region, e.g. "centralindia"
    pub region: Option<String>,

    /// Endpoint override; takes precedence over `region`
    pub endpoint: Option<String>,

    /// Neural voice name
    #[serde(default = "default_voice")]
    pub voice: String,

    /// Audio output format
    #[serde(default = "default_output_format")]
    pub output_format: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl SpeechConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate speech configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self
            .subscription_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().is_empty())
        {
            return Err(ValidationError::MissingRequired("SPEECH__SUBSCRIPTION_KEY"));
        }

        match (&self.endpoint, &self.region) {
            (Some(endpoint), _) if !is_http_url(endpoint) => {
                return Err(ValidationError::InvalidUrl("SPEECH__ENDPOINT"));
            }
            (Some(_), _) => {}
            (None, Some(region)) if !region.is_empty() => {}
            (None, _) => return Err(ValidationError::MissingRequired("SPEECH__REGION")),
        }

        if self.voice.is_empty() {
            return Err(ValidationError::MissingRequired("SPEECH__VOICE"));
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            subscription_key: None,
            region: None,
            endpoint: None,
            voice: default_voice(),
            output_format: default_output_format(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_voice() -> String {
    "en-IN-AartiIndicNeural".to_string()
}

fn default_output_format() -> String {
    "riff-24khz-16bit-mono-pcm".to_string()
}

fn default_timeout() -> u64 {
    30
}
