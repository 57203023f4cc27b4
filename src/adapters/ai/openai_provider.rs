//! OpenAI Provider - Implementation of AIProvider for OpenAI-compatible chat APIs.
//!
//! Talks to either Azure OpenAI (deployment-scoped URL, `api-key` header) or
//! the public OpenAI API (bearer token). Both share the same chat completions
//! request and response bodies.
//!
//! # Configuration
//!
//! ```ignore
//! let config = OpenAIConfig::azure(api_key, "https://my-resource.openai.azure.com", "gpt-4o")
//!     .with_api_version("2024-02-01")
//!     .with_timeout(Duration::from_secs(30));
//!
//! let provider = OpenAIProvider::new(config)?;
//! ```
//!
//! Each call is attempted exactly once; failures are returned to the caller.

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, MessageRole,
    ProviderInfo, TokenUsage,
};

/// Default Azure OpenAI REST API version.
pub const DEFAULT_AZURE_API_VERSION: &str = "2024-02-01";

/// Which OpenAI-compatible service to call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenAIFlavor {
    /// Public OpenAI API.
    OpenAI {
        /// Base URL (default: https://api.openai.com/v1).
        base_url: String,
    },
    /// Azure OpenAI resource.
    Azure {
        /// Resource endpoint, e.g. https://my-resource.openai.azure.com.
        endpoint: String,
        /// Deployment name.
        deployment: String,
        /// REST API version.
        api_version: String,
    },
}

/// Configuration for the OpenAI provider.
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model to use (ignored by Azure, which routes by deployment).
    pub model: String,
    /// Target service.
    pub flavor: OpenAIFlavor,
    /// Request timeout.
    pub timeout: Duration,
}

impl OpenAIConfig {
    /// Creates a configuration for the public OpenAI API.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "gpt-4o".to_string(),
            flavor: OpenAIFlavor::OpenAI {
                base_url: "https://api.openai.com/v1".to_string(),
            },
            timeout: Duration::from_secs(30),
        }
    }

    /// Creates a configuration for an Azure OpenAI deployment.
    pub fn azure(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        deployment: impl Into<String>,
    ) -> Self {
        let deployment = deployment.into();
        Self {
            api_key: Secret::new(api_key.into()),
            model: deployment.clone(),
            flavor: OpenAIFlavor::Azure {
                endpoint: endpoint.into(),
                deployment,
                api_version: DEFAULT_AZURE_API_VERSION.to_string(),
            },
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL (OpenAI only).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        if let OpenAIFlavor::OpenAI { base_url } = &mut self.flavor {
            *base_url = url.into();
        }
        self
    }

    /// Sets the API version (Azure only).
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        if let OpenAIFlavor::Azure { api_version, .. } = &mut self.flavor {
            *api_version = version.into();
        }
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    fn is_azure(&self) -> bool {
        matches!(self.flavor, OpenAIFlavor::Azure { .. })
    }
}

/// OpenAI / Azure OpenAI provider implementation.
pub struct OpenAIProvider {
    config: OpenAIConfig,
    client: Client,
}

impl OpenAIProvider {
    /// Creates a new provider with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `AIError::InvalidRequest` if the HTTP client cannot be built.
    pub fn new(config: OpenAIConfig) -> Result<Self, AIError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AIError::InvalidRequest(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Builds the chat completions endpoint URL.
    fn completions_url(&self) -> String {
        match &self.config.flavor {
            OpenAIFlavor::OpenAI { base_url } => {
                format!("{}/chat/completions", base_url.trim_end_matches('/'))
            }
            OpenAIFlavor::Azure {
                endpoint,
                deployment,
                api_version,
            } => format!(
                "{}/openai/deployments/{}/chat/completions?api-version={}",
                endpoint.trim_end_matches('/'),
                deployment,
                api_version
            ),
        }
    }

    /// Converts our request to the chat completions format.
    fn to_openai_request(&self, request: &CompletionRequest) -> OpenAIRequest {
        let mut messages = Vec::new();

        if let Some(ref prompt) = request.system_prompt {
            messages.push(OpenAIMessage {
                role: "system".to_string(),
                content: prompt.clone(),
            });
        }

        for msg in &request.messages {
            messages.push(OpenAIMessage {
                role: match msg.role {
                    MessageRole::System => "system",
                    MessageRole::User => "user",
                    MessageRole::Assistant => "assistant",
                }
                .to_string(),
                content: msg.content.clone(),
            });
        }

        OpenAIRequest {
            model: (!self.config.is_azure()).then(|| self.config.model.clone()),
            messages,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        }
    }

    /// Sends a request.
    async fn send_request(&self, request: &CompletionRequest) -> Result<Response, AIError> {
        let body = self.to_openai_request(request);

        let builder = self
            .client
            .post(self.completions_url())
            .header("Content-Type", "application/json");
        let builder = if self.config.is_azure() {
            builder.header("api-key", self.config.api_key())
        } else {
            builder.header("Authorization", format!("Bearer {}", self.config.api_key()))
        };

        builder.json(&body).send().await.map_err(|e| {
            if e.is_timeout() {
                AIError::Timeout {
                    timeout_secs: self.config.timeout.as_secs() as u32,
                }
            } else if e.is_connect() {
                AIError::network(format!("Connection failed: {}", e))
            } else {
                AIError::network(e.to_string())
            }
        })
    }

    /// Parses the API response status and handles errors.
    async fn handle_response_status(&self, response: Response) -> Result<Response, AIError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();
        Err(Self::status_error(status.as_u16(), error_body))
    }

    /// Maps a non-success status to an error.
    fn status_error(status: u16, error_body: String) -> AIError {
        match status {
            401 | 403 => AIError::AuthenticationFailed,
            429 => AIError::rate_limited(Self::parse_retry_after(&error_body)),
            400 if error_body.contains("content_filter") => {
                AIError::content_filtered("prompt rejected by content filter")
            }
            400 => AIError::InvalidRequest(error_body),
            500..=599 => AIError::unavailable(format!("Server error {}: {}", status, error_body)),
            _ => AIError::network(format!("Unexpected status {}: {}", status, error_body)),
        }
    }

    /// Parses retry-after from error response.
    fn parse_retry_after(error_body: &str) -> u32 {
        if let Ok(parsed) = serde_json::from_str::<serde_json::Value>(error_body) {
            if let Some(s) = parsed
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
            {
                if let Some(idx) = s.find("try again in ") {
                    let rest = &s[idx + 13..];
                    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
                    if let Ok(secs) = digits.parse::<u32>() {
                        return secs;
                    }
                }
            }
        }
        30
    }

    /// Parses a successful response.
    async fn parse_response(&self, response: Response) -> Result<CompletionResponse, AIError> {
        let response = self.handle_response_status(response).await?;

        let openai_response: OpenAIResponse = response
            .json()
            .await
            .map_err(|e| AIError::parse(format!("Failed to parse response: {}", e)))?;

        Self::into_completion(openai_response)
    }

    fn into_completion(openai_response: OpenAIResponse) -> Result<CompletionResponse, AIError> {
        let choice = openai_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AIError::parse("No choices in response"))?;

        let finish_reason = match choice.finish_reason.as_deref() {
            Some("length") => FinishReason::Length,
            Some("content_filter") => FinishReason::ContentFilter,
            _ => FinishReason::Stop,
        };

        let usage = openai_response
            .usage
            .map(|u| TokenUsage::new(u.prompt_tokens, u.completion_tokens))
            .unwrap_or_default();

        Ok(CompletionResponse {
            content: choice.message.content.unwrap_or_default(),
            usage,
            model: openai_response.model.unwrap_or_default(),
            finish_reason,
        })
    }
}

#[async_trait]
impl AIProvider for OpenAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        tracing::debug!(
            purpose = %request.metadata.purpose,
            trace_id = %request.metadata.trace_id,
            model = %self.config.model,
            "Sending chat completion request"
        );

        let response = self.send_request(&request).await?;
        self.parse_response(response).await
    }

    fn provider_info(&self) -> ProviderInfo {
        let name = if self.config.is_azure() {
            "azure_openai"
        } else {
            "openai"
        };
        ProviderInfo::new(name, &self.config.model)
    }
}

// ----- Chat Completions API Types -----

#[derive(Debug, Serialize)]
struct OpenAIRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<String>,
    messages: Vec<OpenAIMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize)]
struct OpenAIMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct OpenAIResponse {
    model: Option<String>,
    choices: Vec<OpenAIChoice>,
    usage: Option<OpenAIUsage>,
}

#[derive(Debug, Deserialize)]
struct OpenAIChoice {
    message: OpenAIResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAIResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAIUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
}
