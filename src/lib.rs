//! # A2A Orchestrator
//!
//! A task-delegation orchestrator for an A2A-style message protocol, plus
//! adapter services that expose pre-built agents behind the same protocol.
//!
//! The orchestrator discovers agent capabilities at startup (one HTTP GET
//! per configured agent URL), matches incoming free-text queries to an
//! agent through an ordered keyword rule table, and drives the
//! delegate-task protocol: register a working task, send the message
//! envelope, fold the remote outcome (or failure) into the task's terminal
//! status.
//!
//! ## Example
//!
//! ```rust,no_run
//! use a2a_orchestrator::prelude::*;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut orchestrator =
//!         Orchestrator::new("A2A Orchestrator", "Delegates tasks to specialized agents");
//!
//!     let urls = vec![
//!         "http://localhost:8001".parse().unwrap(),
//!         "http://localhost:8002".parse().unwrap(),
//!     ];
//!     orchestrator.discover(&urls).await;
//!
//!     let delegation = orchestrator
//!         .delegate(DelegationRequest::query("research rust adoption"))
//!         .await
//!         .unwrap();
//!     println!("{}: {:?}", delegation.agent, delegation.response);
//! }
//! ```

pub mod adapter;
pub mod client;
pub mod orchestrator;
pub mod protocol;
pub mod registry;
pub mod routing;
pub mod subagent;
pub mod transport;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        adapter::AgentAdapter,
        client::RemoteAgentConnection,
        orchestrator::{Delegation, DelegationRequest, Orchestrator},
        protocol::error::A2AError,
        protocol::{AgentCard, Message, Part, Role, SendMessageRequest, SendMessageResponse, Task,
            TaskState, TaskStatus},
        routing::{KeywordRouter, RouteRule},
        subagent::{AgentError, CommandAgent, ToolAgent},
    };
}
