//! Turning model text into JSON responses.
//!
//! Models often wrap JSON in markdown code fences. Those markers are removed
//! before parsing; nothing else is repaired and the model is never re-asked.

use super::providers::{CompletionProvider, ProviderError};
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StructuredError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("Model output is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Remove every ```` ```json ```` and ```` ``` ```` marker, then trim.
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}

/// Strip fences from `raw` and deserialize the remainder as `T`.
pub fn parse_structured<T: DeserializeOwned>(raw: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(&strip_code_fences(raw))
}

/// Run `prompt` through the provider and parse the reply as `T`.
///
/// `T` is the shape check: use `serde_json::Value` to accept any JSON.
pub async fn generate_structured<T: DeserializeOwned>(
    provider: &dyn CompletionProvider,
    prompt: &str,
) -> Result<T, StructuredError> {
    let raw = provider.complete(prompt).await?;
    let parsed = parse_structured(&raw).map_err(|e| {
        tracing::debug!(output_len = raw.len(), error = %e, "Unparsable model output");
        e
    })?;
    Ok(parsed)
}
