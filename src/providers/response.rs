//! Completion text extraction.
//!
//! Providers disagree on the response envelope. We recognise the
//! OpenAI chat shape, the legacy completion shape and two `output`-based
//! shapes; anything else is handed back as raw text instead of an error.

use serde_json::Value;

/// Pull the completion text out of a successful response body.
///
/// Tried in order:
/// 1. `choices[0].message.content`
/// 2. `choices[0].text`
/// 3. `output` as a string
/// 4. `output[0].content`
/// 5. the raw body, decoded lossily as UTF-8
pub fn extract_text(body: &[u8]) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|json| from_choices(&json).or_else(|| from_output(&json)))
        .unwrap_or_else(|| String::from_utf8_lossy(body).into_owned())
}

fn from_choices(json: &Value) -> Option<String> {
    let first = json.get("choices")?.as_array()?.first()?;
    first
        .get("message")
        .and_then(|m| m.get("content"))
        .and_then(Value::as_str)
        .or_else(|| first.get("text").and_then(Value::as_str))
        .map(str::to_string)
}

fn from_output(json: &Value) -> Option<String> {
    match json.get("output")? {
        Value::String(text) => Some(text.clone()),
        Value::Array(items) => items
            .first()?
            .get("content")
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_message_content() {
        let body = br#"{"choices":[{"message":{"role":"assistant","content":"Hello there."}}]}"#;
        assert_eq!(extract_text(body), "Hello there.");
    }

    #[test]
    fn test_completion_text() {
        let body = br#"{"choices":[{"text":"legacy completion","index":0}]}"#;
        assert_eq!(extract_text(body), "legacy completion");
    }

    #[test]
    fn test_message_content_wins_over_text() {
        let body = br#"{"choices":[{"message":{"content":"chat"},"text":"legacy"}]}"#;
        assert_eq!(extract_text(body), "chat");
    }

    #[test]
    fn test_null_content_falls_back_to_text() {
        let body = br#"{"choices":[{"message":{"content":null},"text":"from text"}]}"#;
        assert_eq!(extract_text(body), "from text");
    }

    #[test]
    fn test_output_string() {
        let body = br#"{"output":"plain output"}"#;
        assert_eq!(extract_text(body), "plain output");
    }

    #[test]
    fn test_output_array_content() {
        let body = br#"{"output":[{"content":"first item"},{"content":"second"}]}"#;
        assert_eq!(extract_text(body), "first item");
    }

    #[test]
    fn test_empty_choices_falls_through_to_output() {
        let body = br#"{"choices":[],"output":"rescued"}"#;
        assert_eq!(extract_text(body), "rescued");
    }

    #[test]
    fn test_unrecognized_shape_returns_raw_body() {
        let body = br#"{"result":{"answer":"42"}}"#;
        assert_eq!(extract_text(body), r#"{"result":{"answer":"42"}}"#);
    }

    #[test]
    fn test_output_array_without_content_returns_raw_body() {
        let body = br#"{"output":[{"type":"reasoning"}]}"#;
        assert_eq!(extract_text(body), r#"{"output":[{"type":"reasoning"}]}"#);
    }

    #[test]
    fn test_unparseable_body_returns_raw_text() {
        assert_eq!(extract_text(b"just some text"), "just some text");
        assert_eq!(extract_text(b""), "");
    }

    #[test]
    fn test_invalid_utf8_is_lossy() {
        let text = extract_text(&[b'o', b'k', 0xff]);
        assert!(text.starts_with("ok"));
    }
}
