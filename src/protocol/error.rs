//! Error types for delegation protocol operations

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

/// Main error type for delegation protocol operations
///
/// Policy: once a task exists for a request, downstream failures are
/// recorded in its status rather than raised; everything here surfaces only
/// before task creation (or on task lookup).
#[derive(Debug, Error)]
pub enum A2AError {
    /// Agent card unreachable or malformed; the agent is skipped, discovery
    /// of the others continues
    #[error("Discovery error: {0}")]
    Discovery(String),

    /// No routing rule matched and no explicit agent was named
    #[error("Could not determine appropriate agent for this query")]
    Routing,

    /// The selected agent name is not in the registry
    #[error("Agent '{name}' not found. Available agents: {}", .available.join(", "))]
    AgentNotFound {
        name: String,
        available: Vec<String>,
    },

    /// Transport-level error (network, connection, non-2xx status)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Request timeout
    #[error("Request timeout")]
    Timeout,

    /// Invalid request, rejected before any task is created
    #[error("{0}")]
    Validation(String),

    /// Task lookup miss
    #[error("Task not found: {task_id}")]
    TaskNotFound { task_id: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl A2AError {
    /// Error for a registry miss, listing the currently registered names
    pub fn agent_not_found(name: impl Into<String>, available: Vec<String>) -> Self {
        Self::AgentNotFound {
            name: name.into(),
            available,
        }
    }
}

/// Result type alias for delegation protocol operations
pub type A2AResult<T> = Result<T, A2AError>;

impl From<reqwest::Error> for A2AError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            A2AError::Timeout
        } else if err.is_connect() {
            A2AError::Transport(format!("Connection error: {}", err))
        } else {
            A2AError::Transport(err.to_string())
        }
    }
}

impl IntoResponse for A2AError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            A2AError::Routing | A2AError::Validation(_) => StatusCode::BAD_REQUEST,
            A2AError::TaskNotFound { .. } => StatusCode::NOT_FOUND,
            // Registry misses stay HTTP 200; the error payload is the
            // documented surface for them.
            A2AError::AgentNotFound { .. } => StatusCode::OK,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = json!({ "error": self.to_string() });
        (status, Json(body)).into_response()
    }
}
