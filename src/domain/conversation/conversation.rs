//! Conversation aggregate: message history plus accumulated field values.

use serde::{Deserialize, Serialize};

use super::dialogue::greeting;
use super::extracted_data::{ExtractedData, MergeOutcome, PartialExtraction};
use super::message::Message;
use crate::domain::form::FormSchema;
use crate::domain::foundation::{ConversationId, Timestamp, ValidationError};

/// A single form-filling conversation.
///
/// # Invariants
///
/// - `messages` is append-only and chronological, starting with the greeting
/// - `extracted_data` keys are field names of `form`
/// - The form schema never changes after `start`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    id: ConversationId,
    form: FormSchema,
    messages: Vec<Message>,
    extracted_data: ExtractedData,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Conversation {
    /// Starts a conversation for `form` with the greeting as the only message.
    ///
    /// # Errors
    ///
    /// Returns the schema's `ValidationError` if it is not usable.
    pub fn start(form: FormSchema) -> Result<Self, ValidationError> {
        form.validate()?;

        let now = Timestamp::now();
        let opening = Message::assistant(greeting(&form));
        Ok(Self {
            id: ConversationId::new(),
            form,
            messages: vec![opening],
            extracted_data: ExtractedData::new(),
            created_at: now,
            updated_at: now,
        })
    }

    // === Accessors ===

    pub fn id(&self) -> ConversationId {
        self.id
    }

    pub fn form(&self) -> &FormSchema {
        &self.form
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn extracted_data(&self) -> &ExtractedData {
        &self.extracted_data
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// The opening assistant message.
    pub fn greeting(&self) -> &str {
        self.messages.first().map(Message::content).unwrap_or_default()
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    // === Turn handling ===

    pub fn record_user_message(&mut self, content: impl Into<String>) {
        self.messages.push(Message::user(content));
        self.touch();
    }

    pub fn record_assistant_message(&mut self, content: impl Into<String>) {
        self.messages.push(Message::assistant(content));
        self.touch();
    }

    /// Merges newly extracted values under the form's schema.
    pub fn apply_extraction(&mut self, partial: &PartialExtraction) -> MergeOutcome {
        let outcome = self.extracted_data.merge(partial, &self.form);
        if !outcome.is_unchanged() {
            self.touch();
        }
        outcome
    }

    /// Required field names without a value, in schema order.
    pub fn missing_required_fields(&self) -> Vec<String> {
        self.form
            .required_field_names()
            .filter(|name| !self.extracted_data.contains(name))
            .map(str::to_string)
            .collect()
    }

    pub fn all_required_collected(&self) -> bool {
        self.form
            .required_field_names()
            .all(|name| self.extracted_data.contains(name))
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}
