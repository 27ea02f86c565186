//! Generation request/response types for the LLM provider port.
//!
//! These types model the data shapes for one provider interaction: the
//! transcript plus sampling parameters going out, the reply text and
//! token accounting coming back, and the error taxonomy in between.

use serde::{Deserialize, Serialize};

use crate::chat::ChatTurn;

/// Sampling parameters sent with every generation request.
///
/// These are process-wide constants, not caller-configurable: `Default`
/// yields exactly the values used in production.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Cap on the reply length, to keep tutor answers short.
    pub max_output_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_output_tokens: 150,
            temperature: 0.7,
            top_p: 0.9,
            top_k: 40,
        }
    }
}

/// Request to an LLM provider for a single synchronous reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// The full transcript: preamble, history, then the new user turn.
    pub contents: Vec<ChatTurn>,
    pub config: GenerationConfig,
}

/// Response from an LLM provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResponse {
    /// The reply's plain-text content.
    pub text: String,
    /// Why generation stopped, as reported by the provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
    /// Token accounting, when the provider reports it. Diagnostic only;
    /// never exposed to the caller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<TokenUsage>,
}

/// Token usage for one generation request/response.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub response_tokens: u32,
}

/// Errors from LLM provider operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("provider error: {message}")]
    Provider { message: String },

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("rate limited")]
    RateLimited,

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("request timed out")]
    Timeout,

    #[error("provider returned no text content")]
    EmptyResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_config_default() {
        let config = GenerationConfig::default();
        assert_eq!(config.max_output_tokens, 150);
        assert!((config.temperature - 0.7).abs() < f64::EPSILON);
        assert!((config.top_p - 0.9).abs() < f64::EPSILON);
        assert_eq!(config.top_k, 40);
    }

    #[test]
    fn test_generation_response_skips_absent_fields() {
        let response = GenerationResponse {
            text: "Olá!".to_string(),
            finish_reason: None,
            usage: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["text"], "Olá!");
        assert!(json.get("finish_reason").is_none());
        assert!(json.get("usage").is_none());
    }

    #[test]
    fn test_llm_error_display() {
        let err = LlmError::Provider {
            message: "HTTP 503: overloaded".to_string(),
        };
        assert!(err.to_string().contains("503"));
        assert_eq!(LlmError::Timeout.to_string(), "request timed out");
    }
}
