//! Provider selection and listing command handlers.

use anyhow::{bail, Context, Result};

use redactum::config::{ConfigStore, ProviderSet};

use super::common::{ask, config_store};

/// Choose the active provider, by name or from a numbered list.
pub(crate) fn cmd_use(name: Option<String>) -> Result<()> {
    let store = config_store();
    let mut set = store.load().context("Failed to load configuration")?;

    if set.is_empty() {
        println!("No providers configured. Run `redactum auth` first.");
        return Ok(());
    }

    let chosen = match name {
        Some(name) => name,
        None => {
            println!("Configured providers:");
            for (i, name) in set.names().iter().enumerate() {
                println!("{}) {}", i + 1, name);
            }
            let answer = ask("Choose provider number: ")?;
            pick_by_number(&set, &answer)?
        }
    };

    set.set_active(&chosen)
        .with_context(|| format!("Cannot select provider '{}'", chosen))?;
    store.save(&set).context("Failed to save configuration")?;
    println!("Set active provider to {}", chosen);
    Ok(())
}

/// Resolve a 1-based list selection to a provider name.
pub(crate) fn pick_by_number(set: &ProviderSet, answer: &str) -> Result<String> {
    let names = set.names();
    match answer.trim().parse::<usize>() {
        Ok(n) if n >= 1 && n <= names.len() => Ok(names[n - 1].to_string()),
        _ => bail!("invalid selection"),
    }
}

/// List configured providers, marking the active one.
pub(crate) fn cmd_providers() -> Result<()> {
    let store = config_store();
    let set = store.load().context("Failed to load configuration")?;

    println!("Config file: {}", store.path().display());
    if set.is_empty() {
        println!("No providers configured. Run `redactum auth` first.");
        return Ok(());
    }

    for record in set.providers.values() {
        let marker = if record.name == set.active_provider {
            "*"
        } else {
            " "
        };
        let model = if record.model.is_empty() {
            "(no model)"
        } else {
            record.model.as_str()
        };
        let base_url = if record.base_url.is_empty() {
            "(no base_url)"
        } else {
            record.base_url.as_str()
        };
        println!(
            "{} {:<12} {:<28} {} key={}",
            marker,
            record.name,
            model,
            base_url,
            record.masked_key()
        );
    }

    if set.active().is_err() {
        println!();
        println!(
            "Active provider '{}' is not configured; run `redactum use`.",
            set.active_provider
        );
    }
    Ok(())
}
