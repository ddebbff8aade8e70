//! Endpoint guessing for OpenAI-compatible providers.
//!
//! Users type all sorts of base URLs (`https://api.x.com`, `.../v1`,
//! `.../openai/v1/`, a full `.../chat/completions`). These helpers turn one
//! of them into an ordered list of endpoints worth trying.

use url::{ParseError, Url};

use crate::config::ProviderRecord;

/// Known-good Groq endpoints, in the order they are tried.
pub const GROQ_FALLBACKS: [&str; 2] = [
    "https://api.groq.com/openai/v1/chat/completions",
    "https://api.groq.com/v1/chat/completions",
];

/// Known-good OpenRouter endpoint.
pub const OPENROUTER_FALLBACK: &str = "https://api.openrouter.ai/v1/chat/completions";

/// Best-effort rewrite of a base URL into a chat-completions endpoint.
///
/// Only the path changes; scheme, host, port, query and fragment keep their
/// original text. Any path that mentions `/v1` gets `/chat/completions`
/// appended, even when `/v1` is not its last segment. A base URL typed
/// without a scheme is treated as a bare path. Anything else that does not
/// parse comes back as-is.
///
/// ```
/// use redactum::providers::normalize;
///
/// assert_eq!(
///     normalize("https://api.example.com"),
///     "https://api.example.com/v1/chat/completions"
/// );
/// assert_eq!(
///     normalize("api.openai.com/v1"),
///     "api.openai.com/v1/chat/completions"
/// );
/// assert_eq!(normalize("not a url"), "not a url");
/// ```
pub fn normalize(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    let path_start = match Url::parse(raw) {
        Ok(url) if url.cannot_be_a_base() => return raw.to_string(),
        Ok(_) => match raw.find("://") {
            Some(i) => {
                let authority = i + 3;
                raw[authority..]
                    .find(['/', '?', '#'])
                    .map_or(raw.len(), |j| authority + j)
            }
            None => return raw.to_string(),
        },
        Err(ParseError::RelativeUrlWithoutBase) if !raw.contains(char::is_whitespace) => 0,
        Err(_) => return raw.to_string(),
    };

    let (prefix, rest) = raw.split_at(path_start);
    let (path, suffix) = rest.split_at(rest.find(['?', '#']).unwrap_or(rest.len()));
    if path.contains("chat/completions") {
        return raw.to_string();
    }

    let trimmed = path.trim_end_matches('/');
    let new_path = if path.contains("/v1") {
        format!("{}/chat/completions", trimmed)
    } else {
        format!("{}/v1/chat/completions", trimmed)
    };
    format!("{}{}{}", prefix, new_path, suffix)
}

/// Ordered endpoints to attempt for one provider record.
///
/// Normalized form first, then the raw `base_url` when it differs, then fixed
/// fallbacks for hosts we recognize. Scheme fixing happens later, in
/// [`with_scheme`].
pub fn build_candidates(record: &ProviderRecord) -> Vec<String> {
    let base_url = record.base_url.as_str();
    let mut candidates = Vec::with_capacity(4);

    let normalized = normalize(base_url);
    if !normalized.is_empty() {
        candidates.push(normalized.clone());
    }
    if !base_url.is_empty() && base_url != normalized {
        candidates.push(base_url.to_string());
    }

    let lower = base_url.to_lowercase();
    if lower.contains("groq") {
        candidates.extend(GROQ_FALLBACKS.iter().map(|s| s.to_string()));
    }
    if lower.contains("openrouter") {
        candidates.push(OPENROUTER_FALLBACK.to_string());
    }

    candidates
}

/// Prefix `https://` onto endpoints typed without a scheme.
pub fn with_scheme(endpoint: &str) -> String {
    if endpoint.starts_with("http") {
        endpoint.to_string()
    } else {
        format!("https://{}", endpoint)
    }
}
