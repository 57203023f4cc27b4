//! Speech command handlers.

mod synthesize_speech;

pub use synthesize_speech::{
    SynthesizeSpeechCommand, SynthesizeSpeechError, SynthesizeSpeechHandler,
};
