//! Scripted provider for tests.

use super::{CompletionProvider, ProviderError};
use async_trait::async_trait;
use std::sync::Mutex;

enum Script {
    Reply(String),
    Fail(String),
}

/// Returns a fixed reply (or failure) and records every prompt it receives.
pub struct MockCompletionProvider {
    script: Script,
    prompts: Mutex<Vec<String>>,
}

impl MockCompletionProvider {
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            script: Script::Reply(text.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Every call fails with `ProviderError::ApiError(message)`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            script: Script::Fail(message.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|prompts| prompts.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl CompletionProvider for MockCompletionProvider {
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }

        match &self.script {
            Script::Reply(text) => Ok(text.clone()),
            Script::Fail(message) => Err(ProviderError::ApiError(message.clone())),
        }
    }
}
