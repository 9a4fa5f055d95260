//! The task-delegation orchestrator
//!
//! Owns the set of remote agent connections, discovers agent capabilities
//! at startup, matches incoming queries to an agent, and drives the
//! delegate-task protocol.

pub mod server;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use url::Url;
use uuid::Uuid;

use crate::{
    client::RemoteAgentConnection,
    protocol::{
        envelope::SendMessageRequest,
        error::A2AError,
        message::Message,
        task::{Task, TaskState},
    },
    registry::TaskRegistry,
    routing::KeywordRouter,
    transport::HttpTransport,
};

/// A delegation request: a free-text query plus optional correlation ids
///
/// Doubles as the `POST /delegate` request body. `query` defaults to empty
/// so a missing field is rejected with the protocol's own validation error
/// rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DelegationRequest {
    /// The query to route
    #[serde(default)]
    pub query: String,

    /// Explicit agent to use, bypassing routing
    #[serde(default)]
    pub agent_name: Option<String>,

    /// Task id to correlate under; generated when absent
    #[serde(default)]
    pub task_id: Option<String>,

    /// Context id to correlate under; generated when absent
    #[serde(default)]
    pub context_id: Option<String>,
}

impl DelegationRequest {
    /// A request carrying just a query
    pub fn query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Pin the request to an explicit agent
    pub fn with_agent(mut self, agent_name: impl Into<String>) -> Self {
        self.agent_name = Some(agent_name.into());
        self
    }
}

/// The outcome of one delegation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Delegation {
    /// Name of the agent the query was routed to
    pub agent: String,

    /// Task id under which the delegation was tracked
    pub task_id: String,

    /// Context id grouping this delegation
    pub context_id: String,

    /// Terminal state of the task (completed or error)
    pub status: TaskState,

    /// Response text, or the failure description for an errored task
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
}

/// Orchestrator that delegates tasks to specialized remote agents
pub struct Orchestrator {
    name: String,
    description: String,
    connections: HashMap<String, RemoteAgentConnection>,
    router: KeywordRouter,
    tasks: TaskRegistry,
}

impl Orchestrator {
    /// Create an orchestrator with the default routing rules
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            connections: HashMap::new(),
            router: KeywordRouter::default(),
            tasks: TaskRegistry::new(),
        }
    }

    /// Replace the routing rules
    pub fn with_router(mut self, router: KeywordRouter) -> Self {
        self.router = router;
        self
    }

    /// The orchestrator's display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The orchestrator's description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Register a connection under its card name
    ///
    /// Names are unique across the registry; a second agent advertising the
    /// same name silently replaces the first.
    pub fn register(&mut self, connection: RemoteAgentConnection) {
        self.connections
            .insert(connection.name().to_string(), connection);
    }

    /// Discover agents at the given URLs, sequentially
    ///
    /// A failure to reach or parse one agent's card excludes that agent and
    /// moves on; discovery never aborts as a whole.
    pub async fn discover(&mut self, agent_urls: &[Url]) {
        for url in agent_urls {
            let transport = HttpTransport::new(url.clone());
            match RemoteAgentConnection::discover(Box::new(transport)).await {
                Ok(connection) => {
                    info!(agent = connection.name(), url = %url, "Connected to agent");
                    self.register(connection);
                }
                Err(e) => {
                    error!(url = %url, error = %e, "Failed to connect to agent");
                }
            }
        }
    }

    /// Names of all registered agents
    pub fn agent_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.connections.keys().cloned().collect();
        names.sort();
        names
    }

    /// Human-readable list of registered agents and their skills
    pub fn agent_descriptions(&self) -> String {
        let mut lines: Vec<String> = self
            .connections
            .values()
            .map(|c| {
                let card = c.card();
                format!(
                    "- {}: {}. Skills: {}",
                    card.name,
                    card.description,
                    card.skill_names()
                )
            })
            .collect();
        lines.sort();
        lines.join("\n")
    }

    /// The orchestrator-side task registry
    pub fn tasks(&self) -> &TaskRegistry {
        &self.tasks
    }

    /// Route the query and drive the delegate-task protocol
    ///
    /// Errors are returned only for failures that occur before a task is
    /// created (routing misses, unknown agent names). Once the local task
    /// exists, remote failures are captured into its error status and the
    /// delegation still resolves.
    pub async fn delegate(&self, request: DelegationRequest) -> Result<Delegation, A2AError> {
        let agent_name = match request.agent_name {
            Some(name) => name,
            None => self
                .router
                .route(&request.query)
                .ok_or(A2AError::Routing)?
                .to_string(),
        };

        let connection = self
            .connections
            .get(&agent_name)
            .ok_or_else(|| A2AError::agent_not_found(&agent_name, self.agent_names()))?;

        let task_id = request
            .task_id
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        let context_id = request
            .context_id
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let message = Message::user(&request.query)
            .with_task_id(&task_id)
            .with_context_id(&context_id);
        let envelope = SendMessageRequest::new(message);

        // Register the local task before the remote call, so a concurrent
        // lookup observes it in the working state.
        self.tasks.create(&task_id, &context_id).await;

        info!(agent = %agent_name, task_id = %task_id, "Delegating task");

        match connection.send_message(&envelope).await {
            Ok(response) => {
                // The call went through: the local task is complete, and the
                // delegation reports whatever terminal state the agent's own
                // task reached (which may itself be an error).
                let remote = response.into_task();
                let text = remote.response_text().map(str::to_string);
                self.tasks.complete(&task_id, text.clone()).await;

                Ok(Delegation {
                    agent: agent_name,
                    task_id: remote.id,
                    context_id: remote.context_id,
                    status: remote.status.state,
                    response: text,
                })
            }
            Err(e) => {
                warn!(agent = %agent_name, task_id = %task_id, error = %e, "Delegation failed");
                let description = format!("Error delegating task to {}: {}", agent_name, e);
                let task = self
                    .tasks
                    .fail(&task_id, description)
                    .await
                    // The task was created above; the registry cannot have
                    // lost it.
                    .ok_or(A2AError::TaskNotFound { task_id })?;

                Ok(Delegation::from_task(agent_name, &task))
            }
        }
    }
}

impl Delegation {
    fn from_task(agent: String, task: &Task) -> Self {
        Self {
            agent,
            task_id: task.id.clone(),
            context_id: task.context_id.clone(),
            status: task.status.state,
            response: task.response_text().map(str::to_string),
        }
    }
}
