//! Connection to a remote agent

use bytes::Bytes;

use crate::{
    protocol::{
        agent::AgentCard,
        envelope::{SendMessageRequest, SendMessageResponse},
        error::A2AError,
    },
    transport::{Transport, TransportRequest},
};

/// A connection binding one agent card to its transport
///
/// One connection exists per registered agent; it is immutable after
/// construction. A single failed call is surfaced to the caller as-is;
/// there are no retries.
pub struct RemoteAgentConnection {
    card: AgentCard,
    transport: Box<dyn Transport>,
}

impl RemoteAgentConnection {
    /// Fetch the agent card from the transport's base URL and bind a
    /// connection to it
    ///
    /// Any failure (connection refused, non-2xx status, malformed body) is
    /// reported as [`A2AError::Discovery`] so that discovery of one agent
    /// never aborts discovery of the others.
    pub async fn discover(transport: Box<dyn Transport>) -> Result<Self, A2AError> {
        let url = transport.base_url().clone();
        let response = transport
            .execute(TransportRequest::get("/"))
            .await
            .map_err(|e| A2AError::Discovery(format!("{}: {}", url, e)))?;

        if !response.is_success() {
            return Err(A2AError::Discovery(format!(
                "{}: HTTP {}",
                url, response.status
            )));
        }

        let card: AgentCard = serde_json::from_slice(&response.body)
            .map_err(|e| A2AError::Discovery(format!("{}: invalid agent card: {}", url, e)))?;

        Ok(Self::new(card, transport))
    }

    /// Bind a connection to an already-fetched card
    pub fn new(card: AgentCard, transport: Box<dyn Transport>) -> Self {
        Self { card, transport }
    }

    /// The agent card this connection is bound to
    pub fn card(&self) -> &AgentCard {
        &self.card
    }

    /// The agent's name, as advertised on its card
    pub fn name(&self) -> &str {
        &self.card.name
    }

    /// Send a message envelope to the agent's `/messages` endpoint
    ///
    /// Fails with [`A2AError::Transport`] on network failure or non-2xx
    /// status, [`A2AError::Timeout`] when the fixed per-call timeout is
    /// exceeded, and [`A2AError::Serialization`] when the response body does
    /// not parse as a response envelope.
    pub async fn send_message(
        &self,
        request: &SendMessageRequest,
    ) -> Result<SendMessageResponse, A2AError> {
        let body = serde_json::to_vec(request)?;

        let transport_request = TransportRequest::post("/messages")
            .header("Content-Type", "application/json")
            .body(Bytes::from(body));

        let response = self.transport.execute(transport_request).await?;

        if !response.is_success() {
            return Err(A2AError::Transport(format!(
                "HTTP {}: {}",
                response.status,
                response.body_text()
            )));
        }

        Ok(serde_json::from_slice(&response.body)?)
    }
}

impl std::fmt::Debug for RemoteAgentConnection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteAgentConnection")
            .field("agent", &self.card.name)
            .field("url", &self.transport.base_url().as_str())
            .finish()
    }
}
