//! HTTP transport implementation using reqwest

use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::protocol::error::A2AError;

use super::{Transport, TransportRequest, TransportResponse};

/// Fixed per-call timeout for all remote agent operations
pub const CALL_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP transport bound to one agent's base URL
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpTransport {
    /// Create a new HTTP transport with the fixed per-call timeout
    ///
    /// # Panics
    ///
    /// Panics if the underlying TLS backend cannot be initialized, the same
    /// condition under which `reqwest::Client::new` panics.
    pub fn new(base_url: Url) -> Self {
        let client = reqwest::Client::builder()
            .timeout(CALL_TIMEOUT)
            .build()
            .expect("failed to initialize HTTP client");
        Self { client, base_url }
    }

    /// Create a new HTTP transport with a custom reqwest client
    pub fn with_client(base_url: Url, client: reqwest::Client) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, A2AError> {
        let url = self
            .base_url
            .join(&request.endpoint)
            .map_err(|e| A2AError::Transport(format!("Invalid endpoint: {}", e)))?;

        let mut req_builder = match request.method.as_str() {
            "POST" => self.client.post(url),
            "GET" => self.client.get(url),
            "PUT" => self.client.put(url),
            "DELETE" => self.client.delete(url),
            _ => {
                return Err(A2AError::Transport(format!(
                    "Unsupported HTTP method: {}",
                    request.method
                )))
            }
        };

        for (key, value) in request.headers {
            req_builder = req_builder.header(key, value);
        }

        if !request.body.is_empty() {
            req_builder = req_builder.body(request.body);
        }

        let response = req_builder.send().await?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();
        let body = response.bytes().await?;

        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }

    fn base_url(&self) -> &Url {
        &self.base_url
    }
}
