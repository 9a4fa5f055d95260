//! Task types and lifecycle management

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::message::Message;

/// A delegated unit of work and its eventual outcome
///
/// Tasks are created in the working state when a delegation request is
/// accepted and transition exactly once to completed or error when the
/// underlying call resolves. They are never deleted; each process keeps its
/// own task set for its lifetime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Unique identifier for the task
    pub id: String,

    /// Context identifier grouping related tasks/messages
    pub context_id: String,

    /// Current status of the task
    pub status: TaskStatus,

    /// When the task was created
    pub created_time: DateTime<Utc>,

    /// When the task was last updated
    pub updated_time: DateTime<Utc>,
}

impl Task {
    /// Create a new task in the working state
    pub fn working(id: impl Into<String>, context_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            context_id: context_id.into(),
            status: TaskStatus::working(),
            created_time: now,
            updated_time: now,
        }
    }

    /// Check if the task has reached a terminal state
    pub fn is_terminal(&self) -> bool {
        self.status.state.is_terminal()
    }

    /// Mark the task completed, embedding the response text (when present)
    /// in a new assistant message
    pub fn mark_completed(&mut self, text: Option<String>) {
        let message = text.map(|t| self.assistant_message(t));
        self.status = TaskStatus {
            state: TaskState::Completed,
            message,
        };
        self.updated_time = Utc::now();
    }

    /// Mark the task failed, embedding the failure description as assistant
    /// message text
    pub fn mark_error(&mut self, text: impl Into<String>) {
        let message = self.assistant_message(text.into());
        self.status = TaskStatus {
            state: TaskState::Error,
            message: Some(message),
        };
        self.updated_time = Utc::now();
    }

    /// The first text part of the status message, if any
    pub fn response_text(&self) -> Option<&str> {
        self.status.message.as_ref().and_then(Message::first_text)
    }

    fn assistant_message(&self, text: String) -> Message {
        Message::assistant(text)
            .with_task_id(&self.id)
            .with_context_id(&self.context_id)
    }
}

/// Task status: the lifecycle state plus the message carrying the outcome
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskStatus {
    /// Current lifecycle state
    pub state: TaskState,

    /// Response or failure text, as an assistant message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
}

impl TaskStatus {
    /// Status for a task that is still being processed
    pub fn working() -> Self {
        Self {
            state: TaskState::Working,
            message: None,
        }
    }
}

/// Task lifecycle state
///
/// Lifecycle: working → completed or working → error. Both outcomes are
/// terminal; there is no cancellation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TaskState {
    /// Task is currently being processed
    Working,

    /// Task completed successfully
    Completed,

    /// Task failed
    Error,
}

impl TaskState {
    /// Check if this is a terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskState::Completed | TaskState::Error)
    }
}
