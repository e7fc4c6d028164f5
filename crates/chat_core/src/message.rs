//! ChatMessage - the chat message wire type
//!
//! Both fields are optional on the wire; missing fields fall back to the
//! defaults below during deserialization.

use serde::{Deserialize, Serialize};

/// Author recorded when a message arrives without one.
pub const DEFAULT_AUTHOR: &str = "Unknown";

fn default_author() -> String {
    DEFAULT_AUTHOR.to_string()
}

/// A single chat message.
///
/// Messages carry no identity and no uniqueness constraint; the only
/// ordering is the append order of the log that holds them.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    /// Display name of the sender, `"Unknown"` when omitted.
    #[serde(default = "default_author")]
    pub author: String,

    /// Message text, empty when omitted.
    #[serde(default)]
    pub message: String,
}

impl ChatMessage {
    pub fn new(author: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            message: message.into(),
        }
    }
}

impl Default for ChatMessage {
    fn default() -> Self {
        Self {
            author: default_author(),
            message: String::new(),
        }
    }
}
