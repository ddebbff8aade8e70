//! Refine command handler.

use std::io::{self, IsTerminal, Read};
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use tracing::warn;

use redactum::config::ConfigStore;
use redactum::error::RedactumError;
use redactum::providers::{CompletionOptions, ProviderClient};
use redactum::tone::{render_prompt, Tone};

use super::common::{config_store, status_hint};

/// Rewrite `words` (or stdin) in `tone` and print the result.
pub(crate) async fn cmd_refine(tone: &str, timeout_secs: u64, words: Vec<String>) -> Result<()> {
    let text = if words.is_empty() && !io::stdin().is_terminal() {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read text from stdin")?;
        buf.trim().to_string()
    } else {
        words.join(" ")
    };
    if text.trim().is_empty() {
        bail!("no text provided");
    }

    let tone = Tone::from_name(tone).or_else(|| {
        warn!(tone = %tone, "Unknown tone, using generic professional instruction");
        None
    });
    let prompt = render_prompt(tone, &text);

    let mut set = config_store()
        .load()
        .context("Failed to load configuration")?;
    set.apply_env_overrides();

    let options = completion_options(timeout_secs);

    eprintln!("Sending prompt to {}...", set.active_provider);
    let refined = ProviderClient::new()
        .complete_active(&set, &prompt, &options)
        .await
        .map_err(with_hint)?;

    println!("{}", refined.trim_end());
    Ok(())
}

fn completion_options(timeout_secs: u64) -> CompletionOptions {
    if timeout_secs == 0 {
        CompletionOptions::new()
    } else {
        CompletionOptions::new().with_timeout(Duration::from_secs(timeout_secs))
    }
}

/// Attach a next-step hint to well-known HTTP failures.
fn with_hint(err: RedactumError) -> anyhow::Error {
    let hint = match &err {
        RedactumError::Exhausted(last) => last.status_code().and_then(status_hint),
        RedactumError::MissingCredential(_) | RedactumError::NoActiveProvider(_) => {
            Some("run `redactum auth` to configure a provider")
        }
        _ => None,
    };
    match hint {
        Some(hint) => anyhow!("{}\n  hint: {}", err, hint),
        None => anyhow::Error::new(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use redactum::error::EndpointError;

    #[test]
    fn test_completion_options_zero_disables_timeout() {
        assert!(completion_options(0).timeout.is_none());
        assert_eq!(
            completion_options(30).timeout,
            Some(Duration::from_secs(30))
        );
    }

    #[test]
    fn test_with_hint_for_status() {
        let err = with_hint(RedactumError::Exhausted(EndpointError::Status {
            status: 401,
            body: "unauthorized".into(),
        }));
        let msg = err.to_string();
        assert!(msg.starts_with("api error 401: unauthorized"));
        assert!(msg.contains("hint:"));
    }

    #[test]
    fn test_with_hint_passes_other_errors_through() {
        let err = with_hint(RedactumError::NoEndpoints);
        assert_eq!(err.to_string(), "no endpoints available to try");
    }
}
