//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Chat-completion providers (Azure OpenAI, OpenAI, mock)
//! - `http` - axum REST API
//! - `speech` - Text-to-speech (Azure Speech, mock)
//! - `storage` - In-memory repositories

pub mod ai;
pub mod http;
pub mod speech;
pub mod storage;
