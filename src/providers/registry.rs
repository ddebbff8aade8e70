//! Known provider presets.
//!
//! Used by `redactum auth` to pre-fill the model and base URL when the user
//! names a provider we already know about.

/// Default connection details for a well-known provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderPreset {
    /// Provider id as typed by the user (e.g. "openai").
    pub name: &'static str,
    /// Suggested model identifier.
    pub model: &'static str,
    /// Suggested chat-completions endpoint.
    pub base_url: &'static str,
}

/// Presets in the order they are listed to the user.
pub const PROVIDER_PRESETS: &[ProviderPreset] = &[
    ProviderPreset {
        name: "openai",
        model: "gpt-4o",
        base_url: "https://api.openai.com/v1/chat/completions",
    },
    ProviderPreset {
        name: "groq",
        model: "llama-3.3-70b-versatile",
        base_url: "https://api.groq.com/openai/v1/chat/completions",
    },
    ProviderPreset {
        name: "anthropic",
        model: "claude-3-opus-20240229",
        base_url: "https://api.anthropic.com/v1/complete",
    },
    ProviderPreset {
        name: "openrouter",
        model: "openai/gpt-4o",
        base_url: "https://api.openrouter.ai/v1/chat/completions",
    },
    ProviderPreset {
        name: "ollama",
        model: "llama3.1",
        base_url: "http://127.0.0.1:11434/v1/complete",
    },
];

/// Look up a preset by provider name, ignoring case and surrounding spaces.
pub fn preset_for(name: &str) -> Option<&'static ProviderPreset> {
    let name = name.trim().to_lowercase();
    PROVIDER_PRESETS.iter().find(|p| p.name == name)
}

/// Names of every preset, for help text.
pub fn preset_names() -> Vec<&'static str> {
    PROVIDER_PRESETS.iter().map(|p| p.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_lookup() {
        let groq = preset_for("groq").unwrap();
        assert_eq!(groq.model, "llama-3.3-70b-versatile");
        assert_eq!(
            groq.base_url,
            "https://api.groq.com/openai/v1/chat/completions"
        );
    }

    #[test]
    fn test_preset_lookup_is_case_insensitive() {
        assert_eq!(preset_for(" OpenAI ").unwrap().name, "openai");
    }

    #[test]
    fn test_unknown_preset() {
        assert!(preset_for("custom").is_none());
        assert!(preset_for("").is_none());
    }

    #[test]
    fn test_preset_names() {
        assert_eq!(
            preset_names(),
            vec!["openai", "groq", "anthropic", "openrouter", "ollama"]
        );
    }

    #[test]
    fn test_every_preset_has_model_and_url() {
        for preset in PROVIDER_PRESETS {
            assert!(!preset.model.is_empty(), "{} has no model", preset.name);
            assert!(preset.base_url.starts_with("http"), "{}", preset.name);
        }
    }
}
