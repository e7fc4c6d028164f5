//! chat_core - Core types and the shared chat log store
//!
//! This crate provides the foundational types used across the service:
//! - `message` - the `ChatMessage` wire type
//! - `store` - `ChatLog`, the owned, injectable in-memory message store

pub mod message;
pub mod store;

// Re-export commonly used types
pub use message::ChatMessage;
pub use store::ChatLog;
