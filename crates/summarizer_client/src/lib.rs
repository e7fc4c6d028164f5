//! summarizer_client - client for the external summarization capability
//!
//! The model is a pre-trained black box reached over HTTP. This crate owns
//! the seam the rest of the service depends on:
//! - `summarizer` - the `Summarizer` trait and output length bounds
//! - `client` - `HttpSummarizer`, the hosted-inference implementation
//! - `config` - environment-driven endpoint/model/key configuration
//! - `error` - client-side error types

pub mod client;
pub mod config;
pub mod error;
pub mod summarizer;

pub use client::HttpSummarizer;
pub use config::SummarizerConfig;
pub use error::{Result, SummarizerError};
pub use summarizer::{Summarizer, SummaryBounds};
