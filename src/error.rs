//! Error types for Redactum
//!
//! Uses `thiserror` for the library error taxonomy. Candidate-level failures
//! are described by [`EndpointError`]; everything a caller can observe is a
//! [`RedactumError`].

use std::fmt;
use thiserror::Error;

// ============================================================================
// Endpoint Error Classification
// ============================================================================

/// Why a single candidate endpoint failed.
///
/// These are recoverable: the dispatch loop records them and moves on to the
/// next candidate. Only the last one ever reaches the caller, wrapped in
/// [`RedactumError::Exhausted`].
#[derive(Debug, Clone, PartialEq)]
pub enum EndpointError {
    /// The request could not be built (malformed URL, bad header value)
    Request(String),
    /// Connection refused, DNS failure, TLS failure, broken body stream
    Transport(String),
    /// The attempt ran past the dispatch deadline
    Timeout(String),
    /// The server answered with a status outside `[200, 300)`
    Status { status: u16, body: String },
}

impl fmt::Display for EndpointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndpointError::Request(msg) => write!(f, "invalid request: {}", msg),
            EndpointError::Transport(msg) => write!(f, "transport error: {}", msg),
            EndpointError::Timeout(msg) => write!(f, "timed out: {}", msg),
            EndpointError::Status { status, body } => {
                write!(f, "api error {}: {}", status, body)
            }
        }
    }
}

impl EndpointError {
    /// Returns the HTTP status code, if the server answered at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            EndpointError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` if no HTTP response was received, including timeouts.
    pub fn is_no_response(&self) -> bool {
        matches!(
            self,
            EndpointError::Transport(_) | EndpointError::Timeout(_)
        )
    }
}

impl From<reqwest::Error> for EndpointError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            EndpointError::Request(err.to_string())
        } else if err.is_timeout() {
            EndpointError::Timeout(err.to_string())
        } else {
            EndpointError::Transport(err.to_string())
        }
    }
}

// ============================================================================
// Primary Error Type
// ============================================================================

/// The primary error type for Redactum operations.
#[derive(Error, Debug)]
pub enum RedactumError {
    /// Persisted configuration could not be read, parsed or written
    #[error("Configuration error: {0}")]
    Config(String),

    /// Standard I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The active provider name has no matching record
    #[error("active provider '{0}' is not configured")]
    NoActiveProvider(String),

    /// The provider record has an empty API key
    #[error("api key for provider '{0}' is empty")]
    MissingCredential(String),

    /// The provider record has an empty base URL
    #[error("provider '{0}' has no base_url configured; set it with `redactum auth` or edit the config")]
    MissingEndpoint(String),

    /// Every candidate endpoint failed; carries the most recent failure
    #[error("{0}")]
    Exhausted(EndpointError),

    /// The candidate list was empty, so nothing was attempted
    #[error("no endpoints available to try")]
    NoEndpoints,
}

impl RedactumError {
    /// Returns `true` for failures detected before any network call.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            RedactumError::NoActiveProvider(_)
                | RedactumError::MissingCredential(_)
                | RedactumError::MissingEndpoint(_)
        )
    }
}

/// A specialized `Result` type for Redactum operations.
pub type Result<T> = std::result::Result<T, RedactumError>;
