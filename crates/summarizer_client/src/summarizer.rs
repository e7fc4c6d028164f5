use async_trait::async_trait;
use serde::Serialize;

use crate::error::Result;

/// Output length bounds passed to the model.
///
/// The defaults reproduce the production invocation: a summary between 20
/// and 100 tokens, deterministic decoding (no sampling).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SummaryBounds {
    pub min_length: u32,
    pub max_length: u32,
    pub do_sample: bool,
}

impl Default for SummaryBounds {
    fn default() -> Self {
        Self {
            min_length: 20,
            max_length: 100,
            do_sample: false,
        }
    }
}

/// The external summarization capability.
///
/// Implementations take already-bounded input text and return the generated
/// summary. The web layer holds this as `Arc<dyn Summarizer>` so tests can
/// substitute a mock.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, input: &str, bounds: SummaryBounds) -> Result<String>;
}
