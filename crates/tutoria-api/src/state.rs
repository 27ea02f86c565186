//! Application state wiring the provider into the chat service.
//!
//! The provider client is constructed once at startup and injected into
//! the chat service; handlers receive it through [`AppState`] rather
//! than reaching for process globals, so tests can substitute a double.

use std::sync::Arc;

use tutoria_core::chat::service::ChatService;
use tutoria_infra::config::ProviderSettings;
use tutoria_infra::llm::create_provider;

/// Shared application state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ChatService>,
}

impl AppState {
    /// Wire the concrete Gemini provider into the chat service.
    pub fn new(settings: ProviderSettings) -> Self {
        Self {
            chat_service: Arc::new(ChatService::new(create_provider(settings))),
        }
    }
}
