//! Core delegation protocol types and definitions

pub mod agent;
pub mod envelope;
pub mod error;
pub mod message;
pub mod task;

pub use agent::{AgentCapabilities, AgentCard, AgentSkill};
pub use envelope::{MessageSendParams, SendMessageRequest, SendMessageResponse};
pub use error::{A2AError, A2AResult};
pub use message::{Message, Part, Role};
pub use task::{Task, TaskState, TaskStatus};
