//! Request bodies accepted by the generation routes.
//!
//! Fields are not validated. Each one is kept as raw JSON so an age can arrive
//! as `7` or `"7"`, and a missing field still yields a prompt.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A request field substituted verbatim into a prompt template.
///
/// Renders strings without quotes, other JSON values as compact JSON, and a
/// missing or `null` field as `undefined`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct PromptField(pub Option<Value>);

impl fmt::Display for PromptField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            None | Some(Value::Null) => f.write_str("undefined"),
            Some(Value::String(s)) => f.write_str(s),
            Some(other) => write!(f, "{}", other),
        }
    }
}

impl From<Value> for PromptField {
    fn from(value: Value) -> Self {
        PromptField(Some(value))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoryRequest {
    #[serde(default)]
    pub age: PromptField,
    #[serde(default)]
    pub topic: PromptField,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub story: PromptField,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranslateRequest {
    #[serde(default)]
    pub text: PromptField,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WordsRequest {
    #[serde(default)]
    pub age: PromptField,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MathRequest {
    #[serde(default)]
    pub age: PromptField,
    #[serde(default)]
    pub operation: PromptField,
}

#[derive(Debug, Clone, Serialize)]
pub struct StoryResponse {
    pub story: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TranslateResponse {
    pub translated: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct WordsResponse {
    pub words: String,
}

/// `/math` wraps whatever the model produced; the problems are not checked.
#[derive(Debug, Clone, Serialize)]
pub struct MathResponse {
    pub problems: Value,
}
