//! Request executor port.
//!
//! This trait defines the interface the service façades call through.
//! Implementations can be HTTP clients, recording mocks, etc. The executor
//! owns transport concerns end to end: base URL, TLS, authentication
//! signing, timeouts.

use serde_json::Value;

use crate::error::Error;

/// HTTP method of a gateway endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// Port trait for executing gateway requests.
#[async_trait::async_trait]
pub trait RequestExecutor: Send + Sync {
    /// Executes one request against the gateway and returns the decoded
    /// JSON body of a success response.
    ///
    /// # Errors
    ///
    /// [`Error::Transport`] on network failure, [`Error::HttpStatus`] on a
    /// non-success status (body attached unmodified when present), and
    /// [`Error::MalformedResponse`] when a success body is not JSON.
    async fn execute(
        &self,
        method: HttpMethod,
        path: &str,
        payload: Option<Value>,
    ) -> Result<Value, Error>;
}
