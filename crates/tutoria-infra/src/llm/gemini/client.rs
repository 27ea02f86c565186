//! GeminiProvider -- concrete `LlmProvider` implementation for Google Gemini.
//!
//! Sends requests to the Generative Language API `generateContent`
//! endpoint with the API key in the `x-goog-api-key` header.
//! Non-streaming only: one request, one reply.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is never
//! logged or included in `Debug` output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use tutoria_core::llm::provider::LlmProvider;
use tutoria_types::llm::{GenerationRequest, GenerationResponse, LlmError, TokenUsage};

use super::types::{
    GeminiContent, GeminiGenerationConfig, GeminiPart, GeminiRequest, GeminiResponse,
};

/// Google Gemini LLM provider.
///
/// # API Key Security
///
/// The API key is stored as a [`SecretString`] and is only exposed when
/// constructing the request header. It never appears in Debug output,
/// Display output, or tracing logs.
pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
}

impl GeminiProvider {
    /// Outbound request timeout. Expiry maps to the server-error path.
    const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

    /// Create a new Gemini provider.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Gemini API key wrapped in SecretString
    /// * `model` - Model identifier (e.g., "gemini-1.5-flash")
    pub fn new(api_key: SecretString, model: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Self::REQUEST_TIMEOUT)
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model,
        }
    }

    /// The configured model identifier.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// The full `generateContent` URL for the configured model.
    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    /// Convert a generic [`GenerationRequest`] into the Gemini wire shape.
    fn to_gemini_request(&self, request: &GenerationRequest) -> GeminiRequest {
        let contents = request
            .contents
            .iter()
            .map(|turn| GeminiContent {
                role: turn.role.to_string(),
                parts: vec![GeminiPart {
                    text: turn.text.clone(),
                }],
            })
            .collect();

        GeminiRequest {
            contents,
            generation_config: GeminiGenerationConfig {
                max_output_tokens: request.config.max_output_tokens,
                temperature: request.config.temperature,
                top_p: request.config.top_p,
                top_k: request.config.top_k,
            },
        }
    }
}

// GeminiProvider intentionally does NOT derive Debug: the SecretString
// field would be redacted, but omitting Debug entirely keeps the rest of
// the internal state out of logs as well.

impl LlmProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, LlmError> {
        let body = self.to_gemini_request(request);

        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", self.api_key.expose_secret())
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LlmError::Timeout
                } else {
                    LlmError::Provider {
                        message: format!("HTTP request failed: {e}"),
                    }
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 | 403 => LlmError::AuthenticationFailed,
                429 => LlmError::RateLimited,
                _ => LlmError::Provider {
                    message: format!("HTTP {status}: {error_body}"),
                },
            });
        }

        let gemini_resp: GeminiResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Deserialization(format!("failed to parse response: {e}")))?;

        let usage = gemini_resp.usage_metadata.map(|u| TokenUsage {
            prompt_tokens: u.prompt_token_count,
            response_tokens: u.candidates_token_count,
        });
        if let Some(u) = &usage {
            debug!(
                prompt_tokens = u.prompt_tokens,
                response_tokens = u.response_tokens,
                "gemini token usage"
            );
        }

        // A reply with no candidate or no text parts is as unusable as a
        // transport failure; both surface on the server-error path.
        let candidate = gemini_resp
            .candidates
            .into_iter()
            .next()
            .ok_or(LlmError::EmptyResponse)?;

        let text = candidate
            .content
            .map(|content| {
                content
                    .parts
                    .iter()
                    .map(|part| part.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(LlmError::EmptyResponse);
        }

        Ok(GenerationResponse {
            text,
            finish_reason: candidate.finish_reason,
            usage,
        })
    }
}

#[cfg(test)]
mod tests {
    use tutoria_types::chat::ChatTurn;
    use tutoria_types::llm::GenerationConfig;

    use super::*;

    fn make_provider() -> GeminiProvider {
        GeminiProvider::new(
            SecretString::from("test-key-not-real"),
            "gemini-1.5-flash".to_string(),
        )
    }

    #[test]
    fn test_provider_name_and_model() {
        let provider = make_provider();
        assert_eq!(provider.name(), "gemini");
        assert_eq!(provider.model(), "gemini-1.5-flash");
    }

    #[test]
    fn test_url_uses_configured_model() {
        let provider = make_provider();
        assert_eq!(
            provider.url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn test_base_url_override() {
        let provider = make_provider().with_base_url("http://localhost:8080".to_string());
        assert_eq!(
            provider.url(),
            "http://localhost:8080/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn test_to_gemini_request() {
        let provider = make_provider();
        let request = GenerationRequest {
            contents: vec![ChatTurn::user("Oi"), ChatTurn::model("Olá!")],
            config: GenerationConfig::default(),
        };

        let gemini_req = provider.to_gemini_request(&request);
        assert_eq!(gemini_req.contents.len(), 2);
        assert_eq!(gemini_req.contents[0].role, "user");
        assert_eq!(gemini_req.contents[0].parts[0].text, "Oi");
        assert_eq!(gemini_req.contents[1].role, "model");
        assert_eq!(gemini_req.generation_config.max_output_tokens, 150);
        assert_eq!(gemini_req.generation_config.top_k, 40);
    }
}
