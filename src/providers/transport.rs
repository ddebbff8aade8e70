//! HTTP transport used by [`ProviderClient`](super::ProviderClient).
//!
//! The client only needs "POST this JSON with this bearer token and tell me
//! the status and body". Keeping that behind a trait lets the dispatch loop
//! be tested without a network.

use async_trait::async_trait;
use reqwest::Client;

use crate::error::EndpointError;

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// `true` for any status in `[200, 300)`.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Sends one chat-completion request.
///
/// Implementations return `Ok` for every HTTP response, whatever its status;
/// `Err` means no response was obtained.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_json(
        &self,
        endpoint: &str,
        api_key: &str,
        body: &[u8],
    ) -> Result<HttpReply, EndpointError>;
}

/// [`Transport`] over a shared `reqwest` client.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Use a preconfigured client (proxies, custom TLS roots).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(
        &self,
        endpoint: &str,
        api_key: &str,
        body: &[u8],
    ) -> Result<HttpReply, EndpointError> {
        let response = self
            .client
            .post(endpoint)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .body(body.to_vec())
            .send()
            .await?;

        let status = response.status().as_u16();
        // A body that fails mid-stream still counts as a reply for this status.
        let body = response
            .bytes()
            .await
            .map(|b| b.to_vec())
            .unwrap_or_default();
        Ok(HttpReply { status, body })
    }
}
