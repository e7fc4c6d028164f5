//! Input assembly for the summarization endpoint.
//!
//! Two deliberate policies live here so tests can pin them:
//! - entries of `chat` that are not JSON objects are silently dropped;
//! - the combined text is capped at `MAX_INPUT_CHARS` characters before it
//!   is handed to the model, with no indication to the caller.

use serde_json::{Map, Value};

/// Cap on the combined input text, in characters.
pub const MAX_INPUT_CHARS: usize = 3000;

fn rendered_message(entry: &Map<String, Value>) -> String {
    match entry.get("message") {
        None => String::new(),
        Some(Value::String(text)) => text.clone(),
        // Non-string values keep their JSON text, mirroring the loose
        // coercion clients have come to rely on.
        Some(other) => other.to_string(),
    }
}

/// Join the message text of every object entry, trimmed, with single spaces.
///
/// Entries with empty or missing messages still contribute an empty element
/// to the join; callers decide whether the combined result is usable.
pub fn combined_text(entries: &[Value]) -> String {
    entries
        .iter()
        .filter_map(Value::as_object)
        .map(|entry| rendered_message(entry).trim().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Prefix of `text` holding at most `max_chars` characters.
///
/// Counts characters, not bytes, so multi-byte input is never split.
pub fn truncate_to_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
