//! Provider client: one prompt in, one completion out.
//!
//! # Example
//!
//! ```rust,ignore
//! use redactum::config::{ConfigStore, FileConfigStore};
//! use redactum::providers::{CompletionOptions, ProviderClient};
//!
//! async fn example() -> redactum::Result<()> {
//!     let set = FileConfigStore::new().load()?;
//!     let client = ProviderClient::new();
//!     let text = client
//!         .complete_active(&set, "Say hi", &CompletionOptions::default())
//!         .await?;
//!     println!("{}", text);
//!     Ok(())
//! }
//! ```

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::config::{ProviderRecord, ProviderSet};
use crate::error::{EndpointError, RedactumError, Result};

use super::endpoint::{build_candidates, with_scheme};
use super::response::extract_text;
use super::transport::{HttpTransport, Transport};

/// Sampling temperature sent with every request.
pub const TEMPERATURE: f32 = 0.4;

// ============================================================================
// Request Types
// ============================================================================

/// Chat-completion request body.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
}

/// A message in the request body.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl CompletionRequest {
    /// Single user-turn request for `model`.
    pub fn new(model: &str, prompt_text: &str) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt_text.to_string(),
            }],
            temperature: TEMPERATURE,
        }
    }
}

/// Per-call dispatch options.
#[derive(Debug, Clone, Default)]
pub struct CompletionOptions {
    /// Budget for the whole dispatch, shared by all candidate attempts
    pub timeout: Option<Duration>,
}

impl CompletionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

// ============================================================================
// Provider Client
// ============================================================================

/// Sends a prompt to a provider, walking the candidate endpoints in order.
///
/// Each candidate gets exactly one attempt. The first 2xx reply wins; any
/// other outcome is remembered and the next candidate is tried. When all of
/// them fail the most recent failure is returned.
#[derive(Clone)]
pub struct ProviderClient {
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for ProviderClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderClient").finish_non_exhaustive()
    }
}

impl Default for ProviderClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ProviderClient {
    /// Client over a default `reqwest` transport.
    pub fn new() -> Self {
        Self::with_transport(Arc::new(HttpTransport::new()))
    }

    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Resolve the active provider of `set`, then [`complete`](Self::complete).
    ///
    /// A dangling active provider fails before any record validation.
    pub async fn complete_active(
        &self,
        set: &ProviderSet,
        prompt_text: &str,
        options: &CompletionOptions,
    ) -> Result<String> {
        let record = set.active()?;
        self.complete(record, prompt_text, options).await
    }

    /// Send `prompt_text` using `record` and return the completion text.
    pub async fn complete(
        &self,
        record: &ProviderRecord,
        prompt_text: &str,
        options: &CompletionOptions,
    ) -> Result<String> {
        if record.api_key.is_empty() {
            return Err(RedactumError::MissingCredential(record.name.clone()));
        }
        if record.base_url.is_empty() {
            return Err(RedactumError::MissingEndpoint(record.name.clone()));
        }

        let body = serde_json::to_vec(&CompletionRequest::new(&record.model, prompt_text))?;
        let candidates = build_candidates(record);
        let deadline = options.timeout.map(|t| Instant::now() + t);

        debug!(
            provider = %record.name,
            model = %record.model,
            candidates = candidates.len(),
            "Dispatching completion"
        );

        let mut last_err: Option<EndpointError> = None;
        for candidate in candidates.iter().filter(|c| !c.is_empty()) {
            let endpoint = with_scheme(candidate);

            let remaining = match deadline {
                Some(deadline) => {
                    let now = Instant::now();
                    if now >= deadline {
                        last_err = Some(EndpointError::Timeout(format!(
                            "dispatch deadline reached before trying {}",
                            endpoint
                        )));
                        break;
                    }
                    Some(deadline - now)
                }
                None => None,
            };

            debug!(endpoint = %endpoint, "Trying endpoint");
            match self.attempt(&endpoint, &record.api_key, &body, remaining).await {
                Ok(text) => {
                    info!(
                        provider = %record.name,
                        endpoint = %endpoint,
                        "Completion received"
                    );
                    return Ok(text);
                }
                Err(e @ EndpointError::Timeout(_)) if deadline.is_some() => {
                    warn!(endpoint = %endpoint, error = %e, "Dispatch deadline reached");
                    last_err = Some(e);
                    break;
                }
                Err(e) => {
                    warn!(endpoint = %endpoint, error = %e, "Endpoint failed, trying next");
                    last_err = Some(e);
                }
            }
        }

        Err(last_err
            .map(RedactumError::Exhausted)
            .unwrap_or(RedactumError::NoEndpoints))
    }

    /// One POST to one endpoint, bounded by `budget` when set.
    async fn attempt(
        &self,
        endpoint: &str,
        api_key: &str,
        body: &[u8],
        budget: Option<Duration>,
    ) -> std::result::Result<String, EndpointError> {
        let send = self.transport.post_json(endpoint, api_key, body);
        let reply = match budget {
            Some(budget) => tokio::time::timeout(budget, send).await.map_err(|_| {
                EndpointError::Timeout(format!(
                    "no response from {} within {:?}",
                    endpoint, budget
                ))
            })??,
            None => send.await?,
        };

        if !reply.is_success() {
            return Err(EndpointError::Status {
                status: reply.status,
                body: reply.body_text(),
            });
        }
        Ok(extract_text(&reply.body))
    }
}
