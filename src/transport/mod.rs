//! Transport abstraction for talking to remote agents

pub mod http;
#[cfg(test)]
pub mod mock;

use std::collections::HashMap;

pub use http::HttpTransport;
use url::Url;

use async_trait::async_trait;
use bytes::Bytes;

use crate::protocol::error::A2AError;

/// Protocol-agnostic transport request
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// The endpoint path (e.g., "/messages", "/tasks/123")
    pub endpoint: String,

    /// HTTP method or equivalent operation
    pub method: String,

    /// Headers or metadata for the request
    pub headers: HashMap<String, String>,

    /// Request body as bytes
    pub body: Bytes,
}

impl TransportRequest {
    /// Create a new transport request
    pub fn new(endpoint: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            method: method.into(),
            headers: HashMap::new(),
            body: Bytes::new(),
        }
    }

    /// Create a GET request for the given endpoint
    pub fn get(endpoint: impl Into<String>) -> Self {
        Self::new(endpoint, "GET")
    }

    /// Create a POST request for the given endpoint
    pub fn post(endpoint: impl Into<String>) -> Self {
        Self::new(endpoint, "POST")
    }

    /// Add a header to the request
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set the request body
    pub fn body(mut self, body: Bytes) -> Self {
        self.body = body;
        self
    }
}

/// Protocol-agnostic transport response
#[derive(Debug)]
pub struct TransportResponse {
    /// Status code (e.g., HTTP status code)
    pub status: u16,

    /// Response headers or metadata
    pub headers: HashMap<String, String>,

    /// Response body as bytes
    pub body: Bytes,
}

impl TransportResponse {
    /// Create a new transport response
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: Bytes::new(),
        }
    }

    /// Set the response body
    pub fn body(mut self, body: Bytes) -> Self {
        self.body = body;
        self
    }

    /// Check if the response indicates success (2xx status code)
    pub fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Render the body as text, for error reporting
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Core transport trait for executing requests against one remote agent
///
/// A transport is bound to a single agent's base URL. A failed call is
/// surfaced to the caller as-is; nothing is retried.
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    /// Execute a transport request asynchronously
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, A2AError>;

    /// The base URL of the agent this transport talks to
    fn base_url(&self) -> &Url;
}

#[async_trait]
impl Transport for Box<dyn Transport> {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, A2AError> {
        (**self).execute(request).await
    }

    fn base_url(&self) -> &Url {
        (**self).base_url()
    }
}
