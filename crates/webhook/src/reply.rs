//! Extraction of reply text from the webhook response body.
//!
//! The provider does not fix a response shape, so the body is probed in
//! priority order: a `response` field, then `output`, then `message`,
//! then the raw body text, then a fixed fallback.

/// Shown when the endpoint answers with an empty body.
pub(crate) const EMPTY_BODY_REPLY: &str = "I've processed your query.";

/// Normalize a successful response body into display text.
pub fn extract_reply(body: &str) -> String {
    let candidate = match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => ["response", "output", "message"]
            .into_iter()
            .find_map(|field| {
                value
                    .get(field)
                    .and_then(serde_json::Value::as_str)
                    .filter(|s| !s.trim().is_empty())
                    .map(str::to_owned)
            })
            .unwrap_or_else(|| body.to_owned()),
        Err(_) => body.to_owned(),
    };

    let cleaned = strip_surrounding_quotes(candidate.trim()).trim().to_owned();
    if cleaned.is_empty() { EMPTY_BODY_REPLY.to_owned() } else { cleaned }
}

/// Strip exactly one layer of surrounding double quotes.
fn strip_surrounding_quotes(s: &str) -> &str {
    s.strip_prefix('"').and_then(|inner| inner.strip_suffix('"')).unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_field_wins() {
        let body = r#"{"response": "from response", "output": "from output", "message": "m"}"#;
        assert_eq!(extract_reply(body), "from response");
    }

    #[test]
    fn test_output_field_when_response_missing() {
        let body = r#"{"output": "from output", "message": "m"}"#;
        assert_eq!(extract_reply(body), "from output");
    }

    #[test]
    fn test_message_field_last_resort_field() {
        assert_eq!(extract_reply(r#"{"message": "from message"}"#), "from message");
    }

    #[test]
    fn test_empty_field_falls_through() {
        let body = r#"{"response": "  ", "output": "real answer"}"#;
        assert_eq!(extract_reply(body), "real answer");
    }

    #[test]
    fn test_plain_text_body_used_verbatim() {
        assert_eq!(extract_reply("plain text answer"), "plain text answer");
    }

    #[test]
    fn test_json_without_known_fields_uses_raw_body() {
        let body = r#"{"status": "ok"}"#;
        assert_eq!(extract_reply(body), body);
    }

    #[test]
    fn test_empty_body_gets_fallback() {
        assert_eq!(extract_reply(""), EMPTY_BODY_REPLY);
        assert_eq!(extract_reply("   "), EMPTY_BODY_REPLY);
    }

    #[test]
    fn test_one_quote_layer_stripped() {
        assert_eq!(extract_reply("\"quoted answer\""), "quoted answer");
        assert_eq!(extract_reply("\"\"double quoted\"\""), "\"double quoted\"");
    }

    #[test]
    fn test_unbalanced_quote_kept() {
        assert_eq!(extract_reply("\"unbalanced"), "\"unbalanced");
    }
}
