//! ChatLog - in-memory message store
//!
//! An explicitly owned handle around a mutex-guarded sequence. Clones share
//! the same underlying log, so the handle can be handed to every request
//! handler without a process-wide global. Process-lifetime only: nothing is
//! persisted and nothing is evicted.

use std::sync::{Arc, Mutex, PoisonError};

use crate::message::ChatMessage;

/// Append-only, append-ordered chat log.
#[derive(Clone, Debug, Default)]
pub struct ChatLog {
    entries: Arc<Mutex<Vec<ChatMessage>>>,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to the end of the log. Always succeeds.
    pub fn append(&self, message: ChatMessage) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message);
    }

    /// Snapshot of the full log in append order.
    pub fn all(&self) -> Vec<ChatMessage> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
