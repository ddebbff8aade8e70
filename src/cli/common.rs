//! Shared CLI helpers used across multiple command handlers.

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::{Context, Result};

use redactum::config::FileConfigStore;

/// Read a line from stdin, trimming whitespace.
pub(crate) fn read_line() -> Result<String> {
    let mut input = String::new();
    io::stdin()
        .lock()
        .read_line(&mut input)
        .with_context(|| "Failed to read input")?;
    Ok(input.trim().to_string())
}

/// Read a password/API key (hidden input on a terminal, plain line otherwise).
pub(crate) fn read_secret() -> Result<String> {
    let secret = if io::stdin().is_terminal() {
        rpassword::read_password()
    } else {
        rpassword::read_password_from_bufread(&mut io::stdin().lock())
    };
    secret
        .map(|s| s.trim().to_string())
        .with_context(|| "Failed to read secret input")
}

/// Print `label` without a newline and read the answer.
pub(crate) fn ask(label: &str) -> Result<String> {
    print!("{}", label);
    io::stdout().flush().ok();
    read_line()
}

/// Like [`ask`], but the answer is not echoed.
pub(crate) fn ask_secret(label: &str) -> Result<String> {
    print!("{}", label);
    io::stdout().flush().ok();
    read_secret()
}

/// The config store used by every command.
pub(crate) fn config_store() -> FileConfigStore {
    FileConfigStore::new()
}

/// Extra guidance for common provider HTTP failures.
pub(crate) fn status_hint(status: u16) -> Option<&'static str> {
    match status {
        401 | 403 => Some("check the API key with `redactum auth`"),
        402 => Some("the provider reports a billing problem on this account"),
        404 => Some("the endpoint or model was not found; check base_url and model"),
        429 => Some("rate limited; wait a moment and try again"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_hint_known_codes() {
        assert!(status_hint(401).unwrap().contains("API key"));
        assert!(status_hint(404).unwrap().contains("base_url"));
        assert!(status_hint(429).unwrap().contains("rate limited"));
    }

    #[test]
    fn test_status_hint_unknown_code() {
        assert!(status_hint(500).is_none());
        assert!(status_hint(418).is_none());
    }
}
