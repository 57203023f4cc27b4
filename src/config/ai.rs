//! AI provider configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// AI provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Which chat-completion service to use
    #[serde(default)]
    pub provider: AiProvider,

    /// API key (Azure resource key or OpenAI secret key)
    pub api_key: Option<Secret<String>>,

    /// Azure OpenAI resource endpoint
    pub endpoint: Option<String>,

    /// Azure OpenAI deployment name
    pub deployment: Option<String>,

    /// Azure OpenAI REST API version
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// OpenAI model name
    #[serde(default = "default_model")]
    pub model: String,

    /// OpenAI base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

/// AI provider type
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AiProvider {
    #[default]
    Azure,
    OpenAI,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if an API key is configured
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().is_empty())
    }

    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.has_api_key() {
            return Err(ValidationError::MissingRequired("AI__API_KEY"));
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }

        match self.provider {
            AiProvider::Azure => {
                let endpoint = self
                    .endpoint
                    .as_deref()
                    .filter(|e| !e.is_empty())
                    .ok_or(ValidationError::MissingRequired("AI__ENDPOINT"))?;
                if !is_http_url(endpoint) {
                    return Err(ValidationError::InvalidUrl("AI__ENDPOINT"));
                }
                if self.deployment.as_deref().map_or(true, str::is_empty) {
                    return Err(ValidationError::MissingRequired("AI__DEPLOYMENT"));
                }
            }
            AiProvider::OpenAI => {
                if !is_http_url(&self.base_url) {
                    return Err(ValidationError::InvalidUrl("AI__BASE_URL"));
                }
            }
        }

        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            provider: AiProvider::default(),
            api_key: None,
            endpoint: None,
            deployment: None,
            api_version: default_api_version(),
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

pub(super) fn is_http_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}

fn default_api_version() -> String {
    "2024-02-01".to_string()
}

fn default_model() -> String {
    "gpt-4o".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    fn azure() -> AiConfig {
        AiConfig {
            api_key: Some(Secret::new("key".to_string())),
            endpoint: Some("https://res.openai.azure.com".to_string()),
            deployment: Some("forms-gpt".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_ai_config_defaults() {
        let config = AiConfig::default();
        assert_eq!(config.provider, AiProvider::Azure);
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.api_version, "2024-02-01");
    }

    #[test]
    fn test_timeout_duration() {
        let config = AiConfig {
            timeout_secs: 60,
            ..Default::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_validation_requires_api_key() {
        assert_eq!(
            AiConfig::default().validate(),
            Err(ValidationError::MissingRequired("AI__API_KEY"))
        );
    }

    #[test]
    fn test_validation_valid_azure() {
        assert!(azure().validate().is_ok());
    }

    #[test]
    fn test_validation_azure_requires_deployment() {
        let config = AiConfig {
            deployment: None,
            ..azure()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("AI__DEPLOYMENT"))
        );
    }

    #[test]
    fn test_validation_azure_endpoint_must_be_url() {
        let config = AiConfig {
            endpoint: Some("res.openai.azure.com".to_string()),
            ..azure()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidUrl("AI__ENDPOINT")));
    }

    #[test]
    fn test_validation_openai_needs_only_key() {
        let config = AiConfig {
            provider: AiProvider::OpenAI,
            api_key: Some(Secret::new("sk-xxx".to_string())),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
