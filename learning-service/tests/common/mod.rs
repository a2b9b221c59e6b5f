//! Test helpers for learning-service integration tests.
//!
//! Routes are exercised in-process against a scripted completion provider.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use learning_service::config::PromptSettings;
use learning_service::services::providers::mock::MockCompletionProvider;
use learning_service::startup::build_router;
use learning_service::AppState;
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub provider: Arc<MockCompletionProvider>,
}

impl TestApp {
    pub fn new(provider: MockCompletionProvider) -> Self {
        let provider = Arc::new(provider);
        let state = AppState::new(provider.clone(), PromptSettings::default());
        Self {
            router: build_router(state),
            provider,
        }
    }

    /// Provider replies with `text` to every prompt.
    pub fn replying(text: &str) -> Self {
        Self::new(MockCompletionProvider::replying(text))
    }

    /// Provider fails every call with `message`.
    pub fn failing(message: &str) -> Self {
        Self::new(MockCompletionProvider::failing(message))
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    pub async fn get_text(&self, uri: &str) -> (StatusCode, String) {
        let response = self
            .router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    /// The single prompt the provider received.
    pub fn last_prompt(&self) -> String {
        self.provider.prompts().pop().expect("provider was not called")
    }
}
