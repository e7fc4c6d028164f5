use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

pub type Result<T, E = ApiError> = std::result::Result<T, E>;

/// Request failures surfaced to the caller.
///
/// The display strings double as the wire-visible `error` bodies and are
/// kept byte-compatible with the responses clients already parse.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid JSON format")]
    InvalidFormat,

    #[error("Invalid input. Expecting JSON with a \"chat\" field (list).")]
    InvalidInput,

    #[error("No meaningful messages found to summarize.")]
    EmptyContent,

    #[error("Server Error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct JsonError {
    error: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidFormat | ApiError::InvalidInput | ApiError::EmptyContent => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(JsonError {
            error: self.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_failures_are_bad_request() {
        assert_eq!(ApiError::InvalidFormat.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::InvalidInput.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::EmptyContent.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_is_server_error() {
        let err = ApiError::Internal("boom".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_wire_messages_match_the_published_contract() {
        assert_eq!(ApiError::InvalidFormat.to_string(), "Invalid JSON format");
        assert_eq!(
            ApiError::InvalidInput.to_string(),
            "Invalid input. Expecting JSON with a \"chat\" field (list)."
        );
        assert_eq!(
            ApiError::EmptyContent.to_string(),
            "No meaningful messages found to summarize."
        );
        assert_eq!(
            ApiError::Internal("model offline".to_string()).to_string(),
            "Server Error: model offline"
        );
    }
}
