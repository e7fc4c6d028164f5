//! Integration tests for the chat log endpoints and the health probe.

use std::sync::Arc;

use actix_http::Request;
use actix_web::{
    dev::{Service, ServiceResponse},
    http::StatusCode,
    test, web, App, Error,
};
use async_trait::async_trait;
use chat_core::ChatLog;
use summarizer_client::{Summarizer, SummaryBounds};
use web_service::server::{app_config, AppState};

/// Stub summarizer; the chat endpoints never call it.
struct StubSummarizer;

#[async_trait]
impl Summarizer for StubSummarizer {
    async fn summarize(
        &self,
        _input: &str,
        _bounds: SummaryBounds,
    ) -> summarizer_client::Result<String> {
        Ok("stub".to_string())
    }
}

async fn setup_test_app() -> (
    impl Service<Request, Response = ServiceResponse, Error = Error>,
    ChatLog,
) {
    let chat_log = ChatLog::new();
    let app_state = web::Data::new(AppState {
        chat_log: chat_log.clone(),
        summarizer: Arc::new(StubSummarizer),
    });

    let app = test::init_service(App::new().app_data(app_state).configure(app_config)).await;
    (app, chat_log)
}

#[actix_web::test]
async fn test_empty_log_lists_as_empty_array() {
    let (app, _log) = setup_test_app().await;

    let req = test::TestRequest::get().uri("/chat").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body, serde_json::json!([]));
}

#[actix_web::test]
async fn test_append_then_list_returns_the_posted_message() {
    let (app, _log) = setup_test_app().await;

    let req = test::TestRequest::post()
        .uri("/chat")
        .set_json(serde_json::json!({"author": "Ada", "message": "hello there"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");

    let req = test::TestRequest::get().uri("/chat").to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;

    let entries = body.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["author"], "Ada");
    assert_eq!(entries[0]["message"], "hello there");
}

#[actix_web::test]
async fn test_missing_author_defaults_to_unknown() {
    let (app, log) = setup_test_app().await;

    let req = test::TestRequest::post()
        .uri("/chat")
        .set_json(serde_json::json!({"message": "anonymous note"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let all = log.all();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].author, "Unknown");
    assert_eq!(all[0].message, "anonymous note");
}

#[actix_web::test]
async fn test_missing_message_defaults_to_empty() {
    let (app, log) = setup_test_app().await;

    let req = test::TestRequest::post()
        .uri("/chat")
        .set_json(serde_json::json!({"author": "Ada"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    assert_eq!(log.all()[0].message, "");
}

#[actix_web::test]
async fn test_appends_keep_their_order() {
    let (app, _log) = setup_test_app().await;

    for (author, message) in [("A", "first"), ("B", "second"), ("A", "third")] {
        let req = test::TestRequest::post()
            .uri("/chat")
            .set_json(serde_json::json!({"author": author, "message": message}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let req = test::TestRequest::get().uri("/chat").to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;

    let messages: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["message"].as_str().unwrap())
        .collect();
    assert_eq!(messages, vec!["first", "second", "third"]);
}

#[actix_web::test]
async fn test_health_check() {
    let (app, _log) = setup_test_app().await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
}
