//! LLM provider and wire types.

use serde::{Deserialize, Serialize};

/// LLM provider identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LLMProvider {
    OpenAI,
    Anthropic,
    Groq,
}

impl std::fmt::Display for LLMProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LLMProvider::OpenAI => write!(f, "openai"),
            LLMProvider::Anthropic => write!(f, "anthropic"),
            LLMProvider::Groq => write!(f, "groq"),
        }
    }
}

/// SSE stream event types for the suggestion stream.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum StreamEvent {
    #[serde(rename = "token")]
    Token { content: String },
    #[serde(rename = "done")]
    Done {
        model: String,
        #[serde(rename = "tokensUsed")]
        tokens_used: usize,
        duration: u64,
    },
    #[serde(rename = "error")]
    Error { error: String },
}

/// LLM config response (keys masked).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LLMConfigResponse {
    pub preferred_provider: String,
    pub openai_configured: bool,
    pub anthropic_configured: bool,
    pub groq_configured: bool,
    pub openai_model: String,
    pub anthropic_model: String,
    pub groq_model: String,
    pub active_provider: Option<String>,
}

/// LLM config update request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LLMConfigUpdate {
    pub preferred_provider: Option<String>,
    pub openai_api_key: Option<String>,
    pub anthropic_api_key: Option<String>,
    pub groq_api_key: Option<String>,
    pub openai_model: Option<String>,
    pub anthropic_model: Option<String>,
    pub groq_model: Option<String>,
}

/// API key test request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestKeyRequest {
    pub provider: String,
    pub api_key: String,
}
