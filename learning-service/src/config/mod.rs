use secrecy::Secret;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Default base URL of the OpenAI-compatible Groq API.
pub const DEFAULT_GROQ_API_BASE: &str = "https://api.groq.com/openai/v1";

#[derive(Debug, Clone)]
pub struct LearningConfig {
    pub common: core_config::Config,
    pub groq: GroqSettings,
    pub prompts: PromptSettings,
    pub observability: ObservabilitySettings,
}

#[derive(Debug, Clone)]
pub struct GroqSettings {
    pub api_key: Secret<String>,
    pub api_base: String,
}

#[derive(Debug, Clone)]
pub struct PromptSettings {
    /// Language `/translate` targets.
    pub translate_language: String,
}

impl Default for PromptSettings {
    fn default() -> Self {
        Self {
            translate_language: "Telugu".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ObservabilitySettings {
    pub log_level: String,
    pub otlp_endpoint: Option<String>,
}

impl LearningConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(LearningConfig {
            common: common_config,
            groq: GroqSettings {
                api_key: Secret::new(get_env("GROQ_API_KEY", None, is_prod)?),
                api_base: get_env("GROQ_API_BASE", Some(DEFAULT_GROQ_API_BASE), is_prod)?,
            },
            prompts: PromptSettings {
                translate_language: get_env("TRANSLATE_LANGUAGE", Some("Telugu"), is_prod)?,
            },
            observability: ObservabilitySettings {
                log_level: get_env("LOG_LEVEL", Some("info"), is_prod)?,
                otlp_endpoint: env::var("OTLP_ENDPOINT").ok().filter(|v| !v.is_empty()),
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
