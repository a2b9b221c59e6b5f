pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

use config::PromptSettings;
use services::CompletionProvider;
use std::sync::Arc;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn CompletionProvider>,
    pub prompts: PromptSettings,
}

impl AppState {
    pub fn new(provider: Arc<dyn CompletionProvider>, prompts: PromptSettings) -> Self {
        Self { provider, prompts }
    }
}
