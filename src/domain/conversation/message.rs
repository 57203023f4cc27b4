//! Message value object for conversations.
//!
//! Messages are immutable records of user/assistant exchanges. The history
//! is passed verbatim to the language model as context, so the serialized
//! shape is `{"role": "...", "content": "..."}`.

use serde::{Deserialize, Serialize};

/// Role of a message sender in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The form-filling assistant.
    Assistant,
    /// The person filling the form.
    User,
}

/// An immutable message within a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    role: Role,
    content: String,
}

impl Message {
    /// Creates a message with the given role and content.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Creates an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_role() {
        assert_eq!(Message::user("hi").role(), Role::User);
        assert_eq!(Message::assistant("hello").role(), Role::Assistant);
    }

    #[test]
    fn message_serializes_as_role_and_content() {
        let json = serde_json::to_value(Message::assistant("Hello!")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"role": "assistant", "content": "Hello!"})
        );
    }
}
