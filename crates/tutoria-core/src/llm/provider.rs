//! LlmProvider trait definition.
//!
//! This is the abstraction the relay calls through. Uses RPITIT (native
//! async fn in traits); the object-safe wrapper for dynamic dispatch
//! lives in [`super::box_provider`].

use tutoria_types::llm::{GenerationRequest, GenerationResponse, LlmError};

/// Trait for LLM provider backends.
///
/// Implementations live in tutoria-infra (e.g., `GeminiProvider`).
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "gemini").
    fn name(&self) -> &str;

    /// Send a transcript and receive a single synchronous reply.
    fn generate(
        &self,
        request: &GenerationRequest,
    ) -> impl std::future::Future<Output = Result<GenerationResponse, LlmError>> + Send;
}
