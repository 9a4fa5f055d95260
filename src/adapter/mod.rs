//! Adapter shims exposing pre-built agents behind the delegation protocol
//!
//! An adapter presents a single wrapped agent on the same `/messages` +
//! `/tasks/{id}` surface the orchestrator speaks, so the orchestrator never
//! distinguishes adapters from any other conformant agent.

pub mod research;
pub mod video;

use std::net::SocketAddr;
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    protocol::{
        agent::AgentCard,
        envelope::{SendMessageRequest, SendMessageResponse},
        error::A2AError,
        task::Task,
    },
    registry::TaskRegistry,
    subagent::AgentError,
};

/// Adapter-specific behavior: the card it advertises and how a query is
/// turned into a wrapped-agent reply
#[async_trait]
pub trait AgentAdapter: Send + Sync + 'static {
    /// The card advertised at the adapter's base URL
    fn card(&self) -> AgentCard;

    /// Preprocess the query, invoke the wrapped agent, postprocess the reply
    ///
    /// Errors returned here are captured into the task's error status; the
    /// error text is what the caller sees.
    async fn handle(&self, query: &str) -> Result<String, AgentError>;
}

/// Shared state of one adapter process: the adapter plus its own task set
pub struct AdapterState<A> {
    adapter: A,
    tasks: TaskRegistry,
}

impl<A: AgentAdapter> AdapterState<A> {
    /// Create adapter state with an empty task registry
    pub fn new(adapter: A) -> Self {
        Self {
            adapter,
            tasks: TaskRegistry::new(),
        }
    }

    /// The adapter's task registry
    pub fn tasks(&self) -> &TaskRegistry {
        &self.tasks
    }

    /// Handle one inbound message envelope
    ///
    /// The query is the in-order concatenation of the message's text parts;
    /// an empty query is rejected before any task is created. After the
    /// task exists, the wrapped agent's outcome (or failure) is folded into
    /// its terminal status and returned in the response envelope.
    pub async fn process(
        &self,
        request: SendMessageRequest,
    ) -> Result<SendMessageResponse, A2AError> {
        let message = request.message();

        let query = message.text();
        if query.is_empty() {
            return Err(A2AError::Validation("No text content in message".to_string()));
        }

        let task_id = message
            .task_id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        let context_id = message
            .context_id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        self.tasks.create(&task_id, &context_id).await;

        let task = match self.adapter.handle(&query).await {
            Ok(reply) => self.tasks.complete(&task_id, Some(reply)).await,
            Err(e) => {
                warn!(task_id = %task_id, error = %e, "Agent invocation failed");
                self.tasks.fail(&task_id, e.to_string()).await
            }
        };

        // The task was created above; the registry cannot have lost it.
        let task = task.ok_or(A2AError::TaskNotFound { task_id })?;

        Ok(SendMessageResponse::reply(request.id, task))
    }
}

/// Build an adapter's router
pub fn router<A: AgentAdapter>(adapter: A) -> Router {
    let state = Arc::new(AdapterState::new(adapter));
    router_with_state(state)
}

/// Build an adapter's router over existing state (shared with tests)
pub fn router_with_state<A: AgentAdapter>(state: Arc<AdapterState<A>>) -> Router {
    Router::new()
        .route("/", get(agent_card::<A>))
        .route("/messages", post(handle_message::<A>))
        .route("/tasks/{task_id}", get(get_task::<A>))
        .with_state(state)
}

/// Bind and serve an adapter until shutdown
pub async fn serve<A: AgentAdapter>(adapter: A, addr: SocketAddr) -> std::io::Result<()> {
    let card = adapter.card();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(agent = %card.name, addr = %listener.local_addr()?, "Agent adapter listening");
    axum::serve(listener, router(adapter)).await
}

/// `GET /`
async fn agent_card<A: AgentAdapter>(State(state): State<Arc<AdapterState<A>>>) -> Json<AgentCard> {
    Json(state.adapter.card())
}

/// `POST /messages`
async fn handle_message<A: AgentAdapter>(
    State(state): State<Arc<AdapterState<A>>>,
    Json(request): Json<SendMessageRequest>,
) -> Result<Json<SendMessageResponse>, A2AError> {
    Ok(Json(state.process(request).await?))
}

/// `GET /tasks/{task_id}`
async fn get_task<A: AgentAdapter>(
    State(state): State<Arc<AdapterState<A>>>,
    Path(task_id): Path<String>,
) -> Result<Json<Task>, A2AError> {
    match state.tasks.get(&task_id).await {
        Some(task) => Ok(Json(task)),
        None => Err(A2AError::TaskNotFound { task_id }),
    }
}
