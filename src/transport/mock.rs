use std::sync::Arc;

use async_trait::async_trait;
use url::Url;

use crate::protocol::error::A2AError;

use super::{Transport, TransportRequest, TransportResponse};

/// Mock transport for internal testing
///
/// Answers requests from a closure so tests can simulate remote agents
/// without a network connection or a mock HTTP server.
#[derive(Clone)]
pub(crate) struct MockTransport {
    handler: Arc<dyn Fn(TransportRequest) -> Result<TransportResponse, A2AError> + Send + Sync>,
    base_url: Url,
}

impl MockTransport {
    /// Create a new mock transport with a custom request handler
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(TransportRequest) -> Result<TransportResponse, A2AError> + Send + Sync + 'static,
    {
        Self {
            handler: Arc::new(handler),
            base_url: Url::parse("mock://agent").unwrap(),
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, A2AError> {
        (self.handler)(request)
    }

    fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl std::fmt::Debug for MockTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockTransport").finish()
    }
}
