//! Speech Synthesizer Adapters.
//!
//! - `AzureSpeechSynthesizer` - Azure Speech text-to-speech REST API
//! - `MockSpeechSynthesizer` - Fixed-audio mock for testing

mod azure_speech;
mod mock_synthesizer;

pub use azure_speech::{
    AzureSpeechConfig, AzureSpeechSynthesizer, DEFAULT_OUTPUT_FORMAT, DEFAULT_VOICE,
};
pub use mock_synthesizer::MockSpeechSynthesizer;
