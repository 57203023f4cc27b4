//! Conversation domain module.
//!
//! A conversation pairs a form schema with the dialogue that fills it:
//! message history, accumulated field values, the merge policy for new
//! extractions, prompt construction and the follow-up policy.

mod conversation;
mod dialogue;
mod extracted_data;
mod extractor;
mod message;
mod prompts;

pub use conversation::Conversation;
pub use dialogue::{fallback_question, greeting, NextTurn, COMPLETION_MESSAGE, MAX_FIELDS_PER_TURN};
pub use extracted_data::{ExtractedData, MergeOutcome, PartialExtraction};
pub use extractor::{parse_extraction, ExtractionError, MAX_RESPONSE_LENGTH};
pub use message::{Message, Role};
pub use prompts::{extraction_prompt, follow_up_prompt, Prompt};
