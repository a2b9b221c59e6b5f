use axum::{response::IntoResponse, Json};
use serde_json::json;

/// Plain-text banner listing the generation routes.
pub const BANNER: &str =
    "🚀 Learning backend running! Use /story, /quiz, /translate, /math, /words.";

pub async fn index() -> &'static str {
    BANNER
}

/// Liveness probe. Does not touch the completion provider.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "learning-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
