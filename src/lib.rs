//! Redactum - rewrite text in a chosen tone through an OpenAI-compatible provider

pub mod config;
pub mod error;
pub mod providers;
pub mod tone;
pub mod utils;

pub use config::{ConfigStore, FileConfigStore, ProviderRecord, ProviderSet};
pub use error::{EndpointError, RedactumError, Result};
pub use providers::{CompletionOptions, ProviderClient, Transport};
pub use tone::{render_prompt, Tone};
