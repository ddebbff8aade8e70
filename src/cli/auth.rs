//! Provider auth command handler.

use anyhow::{bail, Context, Result};
use tracing::info;

use redactum::config::{ConfigStore, ProviderRecord};
use redactum::providers::{preset_for, preset_names};

use super::common::{ask, ask_secret, config_store};

/// Values given on the command line; anything missing is prompted for.
#[derive(Debug, Default)]
pub(crate) struct AuthArgs {
    pub name: Option<String>,
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
}

/// Configure a provider and make it the active one.
pub(crate) fn cmd_auth(args: AuthArgs) -> Result<()> {
    let name = match args.name {
        Some(name) => name.trim().to_string(),
        None => ask(&format!(
            "Provider name (e.g. {}, custom): ",
            preset_names().join(", ")
        ))?,
    };
    if name.is_empty() {
        bail!("provider name is required");
    }

    let preset = preset_for(&name);

    let api_key = match args.api_key {
        Some(key) => key,
        None => ask_secret("API key (input hidden): ")?,
    };

    let model = match args.model {
        Some(model) => model,
        None => match preset {
            Some(p) => ask(&format!("Model (optional) [{}]: ", p.model))?,
            None => ask("Model (optional): ")?,
        },
    };

    let base_url = match args.base_url {
        Some(url) => url,
        None => match preset {
            Some(p) => ask(&format!("Base URL (optional) [{}]: ", p.base_url))?,
            None => ask(
                "Base URL (optional, e.g. https://api.openai.com/v1/chat/completions): ",
            )?,
        },
    };

    let record = build_record(&name, &api_key, &model, &base_url);

    let store = config_store();
    let mut set = store.load().context("Failed to load configuration")?;
    set.upsert_active(record);
    store.save(&set).context("Failed to save configuration")?;

    info!(provider = %name, path = %store.path().display(), "Provider saved");
    println!("Saved provider '{}' and set it as active.", name);
    Ok(())
}

/// Fill empty fields from the preset for `name`, if there is one.
pub(crate) fn build_record(
    name: &str,
    api_key: &str,
    model: &str,
    base_url: &str,
) -> ProviderRecord {
    let preset = preset_for(name);
    let model = match (model.trim(), preset) {
        ("", Some(p)) => p.model,
        (m, _) => m,
    };
    let base_url = match (base_url.trim(), preset) {
        ("", Some(p)) => p.base_url,
        (u, _) => u,
    };
    ProviderRecord::new(name, api_key.trim(), model, base_url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_record_uses_preset_defaults() {
        let record = build_record("groq", "gsk", "", "  ");
        assert_eq!(record.model, "llama-3.3-70b-versatile");
        assert_eq!(
            record.base_url,
            "https://api.groq.com/openai/v1/chat/completions"
        );
    }

    #[test]
    fn test_build_record_explicit_values_win() {
        let record = build_record("openai", "sk", "gpt-4o-mini", "https://proxy.local/v1");
        assert_eq!(record.model, "gpt-4o-mini");
        assert_eq!(record.base_url, "https://proxy.local/v1");
    }

    #[test]
    fn test_build_record_custom_provider_may_stay_partial() {
        let record = build_record("custom", "", "", "");
        assert_eq!(record.name, "custom");
        assert!(record.model.is_empty());
        assert!(record.base_url.is_empty());
    }
}
