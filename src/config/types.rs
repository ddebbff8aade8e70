//! Configuration types for Redactum

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{RedactumError, Result};

/// Provider selected when no config file exists yet.
pub const DEFAULT_ACTIVE_PROVIDER: &str = "groq";

// ============================================================================
// Provider Records
// ============================================================================

/// Stored credentials and connection details for one LLM backend.
///
/// Partial records (empty key or base URL) are allowed to persist; they are
/// only rejected when used for dispatch.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderRecord {
    /// Unique key of this record inside a [`ProviderSet`]
    #[serde(default)]
    pub name: String,
    /// Bearer token sent with every request
    #[serde(default)]
    pub api_key: String,
    /// Model identifier placed in the request body
    #[serde(default)]
    pub model: String,
    /// User-entered endpoint; normalized at dispatch time
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub base_url: String,
}

impl ProviderRecord {
    /// Create a record with every field set.
    pub fn new(name: &str, api_key: &str, model: &str, base_url: &str) -> Self {
        Self {
            name: name.to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            base_url: base_url.to_string(),
        }
    }

    /// The API key with everything but the last four characters hidden.
    pub fn masked_key(&self) -> String {
        let chars: Vec<char> = self.api_key.chars().collect();
        if chars.is_empty() {
            return "(not set)".to_string();
        }
        if chars.len() <= 8 {
            return "*".repeat(chars.len());
        }
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}{}", "*".repeat(chars.len() - 4), tail)
    }
}

impl fmt::Debug for ProviderRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderRecord")
            .field("name", &self.name)
            .field("api_key", &self.masked_key())
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// All configured providers plus the name of the active one.
///
/// `active_provider` may dangle; that is reported by [`ProviderSet::active`],
/// never at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderSet {
    #[serde(default)]
    pub active_provider: String,
    #[serde(default)]
    pub providers: BTreeMap<String, ProviderRecord>,
}

impl Default for ProviderSet {
    fn default() -> Self {
        Self {
            active_provider: DEFAULT_ACTIVE_PROVIDER.to_string(),
            providers: BTreeMap::new(),
        }
    }
}

impl ProviderSet {
    /// Look up the record named by `active_provider`.
    pub fn active(&self) -> Result<&ProviderRecord> {
        self.providers
            .get(&self.active_provider)
            .ok_or_else(|| RedactumError::NoActiveProvider(self.active_provider.clone()))
    }

    /// Insert or replace a record and make it the active one.
    pub fn upsert_active(&mut self, record: ProviderRecord) {
        self.active_provider = record.name.clone();
        self.providers.insert(record.name.clone(), record);
    }

    /// Switch the active provider. Fails if no record has that name.
    pub fn set_active(&mut self, name: &str) -> Result<()> {
        if !self.providers.contains_key(name) {
            return Err(RedactumError::NoActiveProvider(name.to_string()));
        }
        self.active_provider = name.to_string();
        Ok(())
    }

    /// Provider names in stable (sorted) order.
    pub fn names(&self) -> Vec<&str> {
        self.providers.keys().map(String::as_str).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Apply `REDACTUM_*` environment overrides to this in-memory set.
    ///
    /// Overrides are meant for a single run and should not be saved back.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary key lookup.
    ///
    /// `REDACTUM_ACTIVE_PROVIDER` is applied first; the field overrides then
    /// target the (possibly new) active record, creating it if needed.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup("REDACTUM_ACTIVE_PROVIDER").filter(|v| !v.is_empty()) {
            self.active_provider = name;
        }

        let api_key = lookup("REDACTUM_API_KEY");
        let model = lookup("REDACTUM_MODEL");
        let base_url = lookup("REDACTUM_BASE_URL");
        if api_key.is_none() && model.is_none() && base_url.is_none() {
            return;
        }

        let name = self.active_provider.clone();
        let record = self
            .providers
            .entry(name.clone())
            .or_insert_with(|| ProviderRecord {
                name,
                ..ProviderRecord::default()
            });
        if let Some(val) = api_key {
            record.api_key = val;
        }
        if let Some(val) = model {
            record.model = val;
        }
        if let Some(val) = base_url {
            record.base_url = val;
        }
    }
}

// ============================================================================
// Logging
// ============================================================================

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Single-line `LEVEL target: message fields`
    #[default]
    Compact,
    /// Multi-line human-readable output
    Pretty,
    /// JSON lines
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = RedactumError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(RedactumError::Config(format!(
                "unknown log format '{}' (expected compact, pretty or json)",
                other
            ))),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub format: LogFormat,
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Compact,
            level: "warn".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Read `REDACTUM_LOG_LEVEL` and `REDACTUM_LOG_FORMAT`, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(level) = lookup("REDACTUM_LOG_LEVEL").filter(|v| !v.trim().is_empty()) {
            cfg.level = level;
        }
        if let Some(format) = lookup("REDACTUM_LOG_FORMAT") {
            if let Ok(parsed) = format.parse() {
                cfg.format = parsed;
            }
        }
        cfg
    }
}
