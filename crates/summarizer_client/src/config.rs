use std::env;

pub const DEFAULT_API_BASE: &str = "https://api-inference.huggingface.co";
pub const DEFAULT_MODEL: &str = "facebook/bart-large-cnn";

/// Connection settings for the hosted inference endpoint.
///
/// Built from environment variables with fallback to defaults:
/// - `SUMMARIZER_API_BASE`: inference endpoint base URL
/// - `SUMMARIZER_MODEL`: model identifier
/// - `SUMMARIZER_API_KEY`: bearer token, omitted when unset
#[derive(Debug, Clone)]
pub struct SummarizerConfig {
    pub api_base: String,
    pub model: String,
    pub api_key: Option<String>,
}

impl SummarizerConfig {
    pub fn new() -> Self {
        let mut config = SummarizerConfig {
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
        };

        if let Ok(api_base) = env::var("SUMMARIZER_API_BASE") {
            config.api_base = api_base;
        }
        if let Ok(model) = env::var("SUMMARIZER_MODEL") {
            config.model = model;
        }
        if let Ok(api_key) = env::var("SUMMARIZER_API_KEY") {
            config.api_key = Some(api_key);
        }
        config
    }
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self::new()
    }
}
