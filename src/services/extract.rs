// src/services/extract.rs
use serde_json::Value;

const FALLBACK_TEXT: &str = "Received response";

/// Pull a displayable assistant reply out of whatever the relay returned.
///
/// The upstream service has no fixed schema, so this is an ordered list of
/// probes applied until one matches:
/// 1. nothing / null -> empty string
/// 2. unwrap a `webhookResponse` envelope when present
/// 3. a bare string passes through untouched
/// 4. known text-bearing fields, in priority order
/// 5. a single-key wrapper object holding one string
/// 6. last resort, the JSON text of the value itself
pub fn extract_assistant_text(body: Option<&Value>) -> String {
    let Some(body) = body else {
        return String::new();
    };
    if body.is_null() {
        return String::new();
    }

    let webhook = match body.get("webhookResponse") {
        Some(inner) if !inner.is_null() => inner,
        _ => body,
    };

    if let Value::String(s) = webhook {
        return s.clone();
    }

    let candidates = [
        webhook.get("text"),
        webhook.get("reply"),
        webhook.get("message"),
        webhook.get("content"),
        webhook.get("output"),
        body.get("message"),
        body.get("output"),
    ];
    for candidate in candidates.into_iter().flatten() {
        if let Value::String(s) = candidate {
            if !s.trim().is_empty() {
                return s.clone();
            }
        }
    }

    // Wrapper objects with a single unpredictable key still count.
    if let Value::Object(map) = webhook {
        if map.len() == 1 {
            if let Some(Value::String(s)) = map.values().next() {
                if !s.trim().is_empty() {
                    return s.clone();
                }
            }
        }
    }

    serde_json::to_string(webhook).unwrap_or_else(|_| FALLBACK_TEXT.to_string())
}
