//! The relay request handler.
//!
//! `ChatService` validates the caller's message, assembles the
//! transcript, and issues a single generation call against the injected
//! provider. Each request is independent; the service holds no mutable
//! state, so concurrent requests need no coordination.

use tracing::debug;

use tutoria_types::chat::ChatTurn;
use tutoria_types::error::ChatError;
use tutoria_types::llm::{GenerationConfig, GenerationRequest};

use crate::llm::box_provider::BoxLlmProvider;

use super::transcript::build_transcript;

/// Handles one chat relay request end to end.
///
/// The provider is injected at construction, so tests can substitute a
/// double for the real Gemini client.
pub struct ChatService {
    provider: BoxLlmProvider,
}

impl ChatService {
    /// Create a new chat service backed by the given provider.
    pub fn new(provider: BoxLlmProvider) -> Self {
        Self { provider }
    }

    /// Relay one message: validate, assemble the transcript, generate.
    ///
    /// An empty message fails before any provider call. A provider
    /// failure is terminal for the request; no retry is attempted.
    pub async fn handle(
        &self,
        message: &str,
        history: &[ChatTurn],
    ) -> Result<String, ChatError> {
        if message.is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        let request = GenerationRequest {
            contents: build_transcript(history, message),
            config: GenerationConfig::default(),
        };

        let response = self.provider.generate(&request).await?;

        debug!(
            provider = self.provider.name(),
            turns = request.contents.len(),
            finish_reason = response.finish_reason.as_deref(),
            "generation complete"
        );

        Ok(response.text)
    }
}
