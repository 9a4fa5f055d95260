//! Protocol message types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A message in the delegation protocol
///
/// Messages are the unit of communication between the orchestrator and its
/// agents. Each message has a role (user or assistant), one or more parts,
/// and correlation identifiers linking it to a task and a context.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    /// Role of the message sender
    pub role: Role,

    /// Message content parts (at least one expected)
    pub parts: Vec<Part>,

    /// Message identifier
    #[serde(rename = "messageId")]
    pub message_id: String,

    /// Optional task identifier (for associating the message with a task)
    #[serde(rename = "taskId", skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,

    /// Optional context identifier (for grouping related tasks/messages)
    #[serde(rename = "contextId", skip_serializing_if = "Option::is_none")]
    pub context_id: Option<String>,
}

impl Message {
    /// Create a new message with a single text part and a fresh message id
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            parts: vec![Part::text(text)],
            message_id: Uuid::new_v4().to_string(),
            task_id: None,
            context_id: None,
        }
    }

    /// Create a user message with text content
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    /// Create an assistant message with text content
    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Role::Assistant, text)
    }

    /// Set the task ID
    pub fn with_task_id(mut self, task_id: impl Into<String>) -> Self {
        self.task_id = Some(task_id.into());
        self
    }

    /// Set the context ID
    pub fn with_context_id(mut self, context_id: impl Into<String>) -> Self {
        self.context_id = Some(context_id.into());
        self
    }

    /// Add a message part
    pub fn with_part(mut self, part: Part) -> Self {
        self.parts.push(part);
        self
    }

    /// Concatenate the text of every text part, in order
    ///
    /// Parts without text content are skipped. An empty string means the
    /// message carries no usable query text.
    pub fn text(&self) -> String {
        self.parts
            .iter()
            .filter_map(Part::as_text)
            .collect::<String>()
    }

    /// The text of the first text part, if any
    pub fn first_text(&self) -> Option<&str> {
        self.parts.iter().find_map(Part::as_text)
    }
}

/// Role of a message sender
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Message from a user (or the orchestrator acting on a user's behalf)
    User,

    /// Message produced by an agent
    Assistant,
}

/// A part of a message
///
/// The wire format tags every part with a `type` field; only `text` parts
/// exist today. Unrecognized tags deserialize to [`Part::Unknown`] so a
/// message containing them still parses and text extraction can skip them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Part {
    /// Text content
    Text {
        /// The text content; absent text is tolerated on input
        #[serde(skip_serializing_if = "Option::is_none")]
        text: Option<String>,
    },

    /// A part of a type this implementation does not understand
    #[serde(other)]
    Unknown,
}

impl Part {
    /// Create a text part
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text {
            text: Some(text.into()),
        }
    }

    /// The text content, if this is a text part with text present
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Part::Text { text } => text.as_deref(),
            Part::Unknown => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_message_creation() {
        let msg = Message::user("Hello, agent!");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.parts.len(), 1);
        assert!(!msg.message_id.is_empty());

        match &msg.parts[0] {
            Part::Text { text } => assert_eq!(text.as_deref(), Some("Hello, agent!")),
            _ => panic!("Expected text part"),
        }
    }

    #[test]
    fn test_message_with_ids() {
        let msg = Message::user("Test")
            .with_task_id("task-123")
            .with_context_id("ctx-456");

        assert_eq!(msg.task_id, Some("task-123".to_string()));
        assert_eq!(msg.context_id, Some("ctx-456".to_string()));
    }

    #[test]
    fn test_message_serialization() {
        let msg = Message::user("Test message");
        let json = serde_json::to_value(&msg).unwrap();

        assert_eq!(json["role"], "user");
        assert_eq!(json["parts"][0]["type"], "text");
        assert_eq!(json["parts"][0]["text"], "Test message");
        assert!(json.get("messageId").is_some());

        let deserialized: Message = serde_json::from_value(json).unwrap();
        assert_eq!(msg, deserialized);
    }

    #[test]
    fn test_assistant_role_serialization() {
        let msg = Message::assistant("Done");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["role"], "assistant");
    }

    #[test]
    fn test_text_concatenation_preserves_order() {
        let msg = Message::user("one ")
            .with_part(Part::text("two "))
            .with_part(Part::text("three"));

        assert_eq!(msg.text(), "one two three");
    }

    #[test]
    fn test_text_skips_unknown_and_empty_parts() {
        let mut msg = Message::user("query");
        msg.parts.push(Part::Unknown);
        msg.parts.push(Part::Text { text: None });

        assert_eq!(msg.text(), "query");
        assert_eq!(msg.first_text(), Some("query"));
    }

    #[test]
    fn test_unknown_part_type_deserializes() {
        let value = json!({
            "role": "user",
            "parts": [{"type": "image", "uri": "file://x"}],
            "messageId": "msg-1"
        });

        let msg: Message = serde_json::from_value(value).unwrap();
        assert_eq!(msg.parts, vec![Part::Unknown]);
        assert_eq!(msg.text(), "");
    }

    #[test]
    fn test_part_without_text_field() {
        let value = json!({"type": "text"});
        let part: Part = serde_json::from_value(value).unwrap();
        assert_eq!(part.as_text(), None);
    }
}
