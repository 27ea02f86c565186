//! LLM provider implementations.
//!
//! Contains the concrete implementation of the `LlmProvider` trait
//! defined in `tutoria-core` for the Google Gemini API, plus the factory
//! that wires resolved settings into a type-erased provider.

pub mod gemini;

use tutoria_core::llm::box_provider::BoxLlmProvider;

use self::gemini::GeminiProvider;
use crate::config::ProviderSettings;

/// Create a [`BoxLlmProvider`] from resolved provider settings.
///
/// Consumes the settings so the API key moves into the provider without
/// an extra copy lingering elsewhere.
pub fn create_provider(settings: ProviderSettings) -> BoxLlmProvider {
    let ProviderSettings {
        api_key,
        model,
        base_url,
    } = settings;

    let provider = GeminiProvider::new(api_key, model);
    let provider = match base_url {
        Some(base_url) => provider.with_base_url(base_url),
        None => provider,
    };

    BoxLlmProvider::new(provider)
}
