//! Logging initialization for Redactum.
//!
//! Log output always goes to stderr so that stdout carries nothing but the
//! refined text. Supports three formats:
//! - `compact`: `LEVEL target: message fields` (default)
//! - `pretty`: multi-line, human-readable
//! - `json`: structured JSON lines

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

/// Build the event filter: `RUST_LOG` when set, else `cfg.level`.
pub fn build_filter(cfg: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cfg.level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Initialize the global tracing subscriber from config.
///
/// Call this once at startup before any tracing events are emitted. A second
/// call is a no-op.
pub fn init_logging(cfg: &LoggingConfig) {
    let filter = build_filter(cfg);
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let _ = match cfg.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.with_target(true).compact().try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_level_falls_back() {
        let cfg = LoggingConfig {
            format: LogFormat::Compact,
            level: "not==a[filter".to_string(),
        };
        // Must not panic
        let _ = build_filter(&cfg);
    }

    #[test]
    fn test_init_twice_is_harmless() {
        let cfg = LoggingConfig::default();
        init_logging(&cfg);
        init_logging(&cfg);
    }
}
