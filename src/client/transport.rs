//! HTTP transport seam.
//!
//! The executor talks to the network only through [`Transport`], which keeps the status
//! classification testable without sockets. [`ReqwestTransport`] is the production
//! implementation.

use super::request::MemoHttpRequest;
use crate::domain::error::{MemodropError, Result};
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// What came back from the server, before classification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status, or `None` if the transport could not produce one.
    pub status: Option<u16>,
    pub body: Vec<u8>,
}

/// A request that never produced a response (DNS, TLS, timeout, refused, ...).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Executes one [`MemoHttpRequest`].
///
/// Implementations must not retry and must report every non-HTTP failure as a
/// [`TransportError`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(
        &self,
        request: &MemoHttpRequest,
    ) -> std::result::Result<TransportResponse, TransportError>;
}

/// [`Transport`] backed by a `reqwest` client with an overall timeout.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Builds a client with rustls and a `memodrop/<version>` user agent.
    ///
    /// # Parameters
    ///
    /// * `timeout` - Overall limit per request, covering connect, send and body read
    ///
    /// # Example
    ///
    /// ```
    /// use memodrop::{MemoService, ReqwestTransport};
    /// use std::sync::Arc;
    /// use std::time::Duration;
    ///
    /// let transport = ReqwestTransport::new(Duration::from_secs(30))?;
    /// let _service = MemoService::new(Arc::new(transport));
    /// # Ok::<(), memodrop::MemodropError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`MemodropError::Transport`] if the TLS backend cannot be initialized.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("memodrop/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| MemodropError::Transport(describe(&e)))?;

        Ok(Self { client })
    }

    /// Wraps an already configured client.
    ///
    /// Timeouts, proxies and headers are whatever `client` was built with.
    #[must_use]
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(
        &self,
        request: &MemoHttpRequest,
    ) -> std::result::Result<TransportResponse, TransportError> {
        let mut builder = self
            .client
            .request(request.method.clone(), request.url.clone())
            .body(request.body.clone());
        for (name, value) in &request.headers {
            builder = builder.header(*name, value.as_str());
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                tracing::debug!("request timed out");
            }
            TransportError(describe(&e))
        })?;

        let status = response.status().as_u16();
        let body = match response.bytes().await {
            Ok(bytes) => bytes.to_vec(),
            Err(e) => {
                tracing::debug!(status, error = %e, "failed to read response body");
                Vec::new()
            }
        };

        Ok(TransportResponse {
            status: Some(status),
            body,
        })
    }
}

/// Flattens an error and its sources into one line.
fn describe(error: &dyn std::error::Error) -> String {
    let mut text = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !text.contains(&cause_text) {
            text.push_str(": ");
            text.push_str(&cause_text);
        }
        source = cause.source();
    }
    text
}
