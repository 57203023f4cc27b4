//! Application services shared by the conversation handlers.

mod dialogue_controller;
mod extraction_engine;

pub use dialogue_controller::{
    DialogueController, TurnReply, FOLLOW_UP_MAX_TOKENS, FOLLOW_UP_TEMPERATURE,
};
pub use extraction_engine::{ExtractionEngine, EXTRACTION_MAX_TOKENS, EXTRACTION_TEMPERATURE};
