//! The five generation routes.
//!
//! Each one renders its prompt, makes a single completion call and shapes the
//! reply. Failures are logged here and answered with a 500.

use crate::models::{
    MathRequest, MathResponse, QuizRequest, StoryRequest, StoryResponse, TranslateRequest,
    TranslateResponse, WordsRequest, WordsResponse,
};
use crate::services::{generate_structured, prompts, StructuredError};
use super::extract::JsonBody;
use crate::AppState;
use axum::{extract::State, Json};
use serde_json::Value;
use service_core::error::AppError;

pub const QUIZ_FAILURE: &str = "Failed to generate quiz";
pub const MATH_FAILURE: &str = "Failed to generate problems";

/// Plain-text completion; provider failures surface their message.
async fn complete_text(state: &AppState, route: &str, prompt: &str) -> Result<String, AppError> {
    state.provider.complete(prompt).await.map_err(|e| {
        tracing::error!(route, error = %e, "Completion failed");
        AppError::Upstream(e.to_string())
    })
}

/// Structured failures collapse into the route's fixed message.
fn structured_failure(
    route: &'static str,
    message: &'static str,
) -> impl FnOnce(StructuredError) -> AppError {
    move |e| {
        tracing::error!(route, error = %e, "Structured generation failed");
        AppError::Generation(message)
    }
}

pub async fn story_handler(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<StoryRequest>,
) -> Result<Json<StoryResponse>, AppError> {
    let story = complete_text(&state, "story", &prompts::story_prompt(&req)).await?;
    Ok(Json(StoryResponse { story }))
}

pub async fn quiz_handler(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<QuizRequest>,
) -> Result<Json<Value>, AppError> {
    let quiz: Value = generate_structured(state.provider.as_ref(), &prompts::quiz_prompt(&req))
        .await
        .map_err(structured_failure("quiz", QUIZ_FAILURE))?;
    Ok(Json(quiz))
}

pub async fn translate_handler(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<TranslateRequest>,
) -> Result<Json<TranslateResponse>, AppError> {
    let prompt = prompts::translate_prompt(&req, &state.prompts.translate_language);
    let translated = complete_text(&state, "translate", &prompt).await?;
    Ok(Json(TranslateResponse { translated }))
}

pub async fn words_handler(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<WordsRequest>,
) -> Result<Json<WordsResponse>, AppError> {
    let words = complete_text(&state, "words", &prompts::words_prompt(&req)).await?;
    Ok(Json(WordsResponse { words }))
}

pub async fn math_handler(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<MathRequest>,
) -> Result<Json<MathResponse>, AppError> {
    let problems: Value = generate_structured(state.provider.as_ref(), &prompts::math_prompt(&req))
        .await
        .map_err(structured_failure("math", MATH_FAILURE))?;
    Ok(Json(MathResponse { problems }))
}
