//! Completion provider abstractions and implementations.
//!
//! Handlers only see the [`CompletionProvider`] trait, so the Groq backend can
//! be swapped for the scripted mock in tests.

pub mod groq;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Model every completion is requested from.
pub const COMPLETION_MODEL: &str = "llama-3.1-8b-instant";

/// Sampling temperature for every completion.
pub const COMPLETION_TEMPERATURE: f32 = 0.7;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Completion contained no text")]
    EmptyResponse,
}

/// Single-shot text completion.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send `prompt` as one user message and return the text of the first
    /// choice.
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError>;
}
