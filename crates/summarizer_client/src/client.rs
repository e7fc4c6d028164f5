use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::SummarizerConfig;
use crate::error::{Result, SummarizerError};
use crate::summarizer::{Summarizer, SummaryBounds};

/// `Summarizer` implementation backed by a hosted inference endpoint.
///
/// Speaks the hosted-inference wire shape: `POST {base}/models/{model}` with
/// `{"inputs": ..., "parameters": {...}}`, answered by a candidate list of
/// `{"summary_text": ...}` objects. Each call makes exactly one attempt;
/// there is no retry and no timeout.
pub struct HttpSummarizer {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: SummaryBounds,
}

#[derive(Deserialize)]
struct InferenceCandidate {
    summary_text: String,
}

impl HttpSummarizer {
    pub fn new(config: SummarizerConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.api_base,
            model: config.model,
            api_key: config.api_key,
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}", self.base_url, self.model)
    }
}

#[async_trait]
impl Summarizer for HttpSummarizer {
    async fn summarize(&self, input: &str, bounds: SummaryBounds) -> Result<String> {
        let body = InferenceRequest {
            inputs: input,
            parameters: bounds,
        };

        log::debug!(
            "summarization request: model={}, input_chars={}",
            self.model,
            input.chars().count()
        );

        let mut request = self.client.post(self.endpoint()).json(&body);
        if let Some(api_key) = &self.api_key {
            request = request.header("Authorization", format!("Bearer {api_key}"));
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await?;
            return Err(SummarizerError::Api(format!("HTTP {status}: {text}")));
        }

        let text = response.text().await?;
        let candidates: Vec<InferenceCandidate> = serde_json::from_str(&text)?;

        candidates
            .into_iter()
            .next()
            .map(|candidate| candidate.summary_text)
            .ok_or_else(|| SummarizerError::Api("model returned no candidates".to_string()))
    }
}
