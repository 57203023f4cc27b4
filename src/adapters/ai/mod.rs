//! AI Provider Adapters.
//!
//! Implementations of the AIProvider port.
//!
//! ## Available Adapters
//!
//! - `MockAIProvider` - Configurable mock for testing
//! - `OpenAIProvider` - Azure OpenAI deployments and the public OpenAI API

mod mock_provider;
mod openai_provider;

pub use mock_provider::{MockAIProvider, MockError, MockResponse, DEFAULT_MOCK_RESPONSE};
pub use openai_provider::{OpenAIConfig, OpenAIFlavor, OpenAIProvider, DEFAULT_AZURE_API_VERSION};
