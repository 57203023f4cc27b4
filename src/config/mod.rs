//! Application configuration module
//!
//! Configuration is loaded from environment variables (and an optional `.env`
//! file) using the `config` and `dotenvy` crates. Variables carry the
//! `AUTOFORM` prefix and nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use autoform::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod ai;
mod error;
mod server;
mod speech;

pub use ai::{AiConfig, AiProvider};
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};
pub use speech::SpeechConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, logging, CORS)
    #[serde(default)]
    pub server: ServerConfig,

    /// Chat-completion provider (Azure OpenAI or OpenAI)
    #[serde(default)]
    pub ai: AiConfig,

    /// Azure Speech text-to-speech
    #[serde(default)]
    pub speech: SpeechConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Environment Variable Format
    ///
    /// - `AUTOFORM__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `AUTOFORM__AI__ENDPOINT=...` -> `ai.endpoint = ...`
    /// - `AUTOFORM__SPEECH__REGION=...` -> `speech.region = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("AUTOFORM")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` found, server section first. The
    /// request timeout must outlast a full turn: two completions back to back,
    /// or one synthesis call.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate()?;
        self.speech.validate()?;

        let minimum = (2 * self.ai.timeout_secs).max(self.speech.timeout_secs);
        if self.server.request_timeout_secs <= minimum {
            return Err(ValidationError::RequestTimeoutTooShort {
                request: self.server.request_timeout_secs,
                minimum,
            });
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
