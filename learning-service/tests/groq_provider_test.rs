//! Groq provider against a local stub of the chat completions API.

use learning_service::services::providers::groq::{GroqCompletionProvider, GroqConfig};
use learning_service::services::{CompletionProvider, ProviderError};
use secrecy::Secret;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn provider(server: &MockServer) -> GroqCompletionProvider {
    GroqCompletionProvider::new(GroqConfig {
        api_key: Secret::new("test-key".to_string()),
        api_base: server.uri(),
    })
    .expect("provider")
}

#[tokio::test]
async fn returns_first_choice_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "model": "llama-3.1-8b-instant",
            "messages": [{ "role": "user", "content": "Tell me a story" }],
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "chatcmpl-1",
            "choices": [
                { "index": 0, "message": { "role": "assistant", "content": "First" } },
                { "index": 1, "message": { "role": "assistant", "content": "Second" } }
            ],
            "usage": { "prompt_tokens": 4, "completion_tokens": 1, "total_tokens": 5 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let text = provider(&server).complete("Tell me a story").await.unwrap();

    assert_eq!(text, "First");
}

#[tokio::test]
async fn sends_fixed_temperature() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "content": "ok" } }]
        })))
        .mount(&server)
        .await;

    provider(&server).complete("hi").await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let temperature = body["temperature"].as_f64().unwrap();
    assert!((temperature - 0.7).abs() < 1e-6);
}

#[tokio::test]
async fn maps_429_to_rate_limited() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let err = provider(&server).complete("hi").await.unwrap_err();

    assert!(matches!(err, ProviderError::RateLimited));
}

#[tokio::test]
async fn maps_auth_failure_to_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid API Key"))
        .mount(&server)
        .await;

    let err = provider(&server).complete("hi").await.unwrap_err();

    match err {
        ProviderError::ApiError(msg) => assert!(msg.contains("Invalid API Key")),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn empty_choices_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let err = provider(&server).complete("hi").await.unwrap_err();

    assert!(matches!(err, ProviderError::EmptyResponse));
}

#[tokio::test]
async fn unreachable_service_is_a_network_error() {
    let provider = GroqCompletionProvider::new(GroqConfig {
        api_key: Secret::new("test-key".to_string()),
        api_base: "http://127.0.0.1:1".to_string(),
    })
    .unwrap();

    let err = provider.complete("hi").await.unwrap_err();

    assert!(matches!(err, ProviderError::NetworkError(_)));
}

#[tokio::test]
async fn null_content_makes_text_route_fail() {
    use axum::{body::Body, http::Request, http::StatusCode};
    use http_body_util::BodyExt;
    use learning_service::{config::PromptSettings, startup::build_router, AppState};
    use std::sync::Arc;
    use tower::util::ServiceExt;

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "role": "assistant", "content": null } }]
        })))
        .mount(&server)
        .await;

    let router = build_router(AppState::new(
        Arc::new(provider(&server)),
        PromptSettings::default(),
    ));
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/story")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"age":6,"topic":"owls"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({ "error": "Completion contained no text" }));
}
