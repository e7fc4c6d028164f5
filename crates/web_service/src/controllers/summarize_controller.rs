use actix_web::{
    web::{self, Bytes, Data},
    HttpResponse,
};
use log::{debug, error};
use serde_json::Value;
use summarizer_client::SummaryBounds;

use crate::{
    error::{ApiError, Result},
    models::SummarizeResponse,
    server::AppState,
    services::summarize_service::{combined_text, truncate_to_chars, MAX_INPUT_CHARS},
};

/// Summarize the text of a posted chat transcript.
///
/// The body is read raw and parsed by hand: classification of a malformed
/// body versus a well-formed body with the wrong shape belongs to the error
/// taxonomy here, not to the framework's extractor.
pub async fn summarize_chat(app_state: Data<AppState>, body: Bytes) -> Result<HttpResponse> {
    let payload: Value = serde_json::from_slice(&body).map_err(|_| ApiError::InvalidFormat)?;

    let chat = payload
        .get("chat")
        .and_then(Value::as_array)
        .ok_or(ApiError::InvalidInput)?;

    let combined = combined_text(chat);
    if combined.trim().is_empty() {
        return Err(ApiError::EmptyContent);
    }

    let safe_input = truncate_to_chars(&combined, MAX_INPUT_CHARS);
    debug!(
        "summarizing {} of {} combined chars",
        safe_input.chars().count(),
        combined.chars().count()
    );

    // One attempt, no retry. The request suspends until the model answers.
    let summary = app_state
        .summarizer
        .summarize(safe_input, SummaryBounds::default())
        .await
        .map_err(|e| {
            error!("summarization failed: {e}");
            ApiError::Internal(e.to_string())
        })?;

    Ok(HttpResponse::Ok().json(SummarizeResponse { summary }))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/summarize", web::post().to(summarize_chat));
}
