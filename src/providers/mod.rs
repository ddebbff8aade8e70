//! Providers module - OpenAI-compatible chat-completion dispatch
//!
//! A provider is any HTTP endpoint that accepts an OpenAI-style
//! `chat/completions` request. Since users configure these by hand, the
//! client guesses a few likely endpoints from the configured base URL and
//! tries them in order.
//!
//! # Example
//!
//! ```rust,ignore
//! use redactum::config::ProviderRecord;
//! use redactum::providers::{CompletionOptions, ProviderClient};
//!
//! async fn example() {
//!     let record = ProviderRecord::new(
//!         "groq",
//!         "gsk_...",
//!         "llama-3.3-70b-versatile",
//!         "https://api.groq.com/openai/v1",
//!     );
//!     let text = ProviderClient::new()
//!         .complete(&record, "Hello!", &CompletionOptions::default())
//!         .await
//!         .unwrap();
//!     println!("{}", text);
//! }
//! ```

mod client;
pub mod endpoint;
mod registry;
pub mod response;
pub mod transport;

pub use client::{ChatMessage, CompletionOptions, CompletionRequest, ProviderClient, TEMPERATURE};
pub use endpoint::{build_candidates, normalize, with_scheme};
pub use registry::{preset_for, preset_names, ProviderPreset, PROVIDER_PRESETS};
pub use response::extract_text;
pub use transport::{HttpReply, HttpTransport, Transport};
