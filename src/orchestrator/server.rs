//! HTTP surface of the orchestrator

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::protocol::error::A2AError;

use super::{Delegation, DelegationRequest, Orchestrator};

/// Body of the root endpoint: who this orchestrator is and which agents it
/// can reach
#[derive(Debug, Serialize, Deserialize)]
pub struct OrchestratorInfo {
    pub name: String,
    pub description: String,
    pub agents: Vec<String>,
}

/// Build the orchestrator's router
pub fn router(orchestrator: Arc<Orchestrator>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/delegate", post(delegate))
        .with_state(orchestrator)
}

/// Bind and serve the orchestrator until shutdown
pub async fn serve(orchestrator: Arc<Orchestrator>, addr: SocketAddr) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "Orchestrator listening");
    axum::serve(listener, router(orchestrator)).await
}

/// `GET /`
async fn root(State(orchestrator): State<Arc<Orchestrator>>) -> Json<OrchestratorInfo> {
    Json(OrchestratorInfo {
        name: orchestrator.name().to_string(),
        description: orchestrator.description().to_string(),
        agents: orchestrator.agent_names(),
    })
}

/// `POST /delegate`
async fn delegate(
    State(orchestrator): State<Arc<Orchestrator>>,
    Json(request): Json<DelegationRequest>,
) -> Result<Json<Delegation>, A2AError> {
    if request.query.is_empty() {
        return Err(A2AError::Validation("Query is required".to_string()));
    }

    let delegation = orchestrator.delegate(request).await?;
    Ok(Json(delegation))
}
