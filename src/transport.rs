//! HTTP transport abstraction.
//!
//! The client talks to the network through the [`Transport`] trait so tests
//! can substitute a fake without a real network. The default implementation,
//! [`HttpTransport`], issues requests over reqwest with a per-request timeout.
//!
//! A transport returns the raw status and body; status-to-error mapping and
//! body decoding happen in the client layer. Transports never retry.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::{error::Result, request::Method, request::Request};

/// Default per-request timeout applied by [`HttpTransport`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Raw outcome of an issued request: HTTP status plus the undecoded body.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

/// Capability to issue a constructed [`Request`] and return the raw response.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: &Request) -> Result<TransportResponse>;
}

/// Transport backed by a shared reqwest [`Client`].
pub struct HttpTransport {
    client: Client,
    timeout: Duration,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        HttpTransport {
            client: Client::new(),
            timeout,
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: &Request) -> Result<TransportResponse> {
        debug!(
            method = request.method.as_str(),
            url = %request.url,
            "making request"
        );

        let builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
            Method::Delete => self.client.delete(&request.url),
        };

        let response = builder
            .query(&request.params)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(TransportResponse { status, body })
    }
}
