//! The chat relay endpoint.
//!
//! POST /chat
//!
//! Accepts `{message, history?}`, relays to the chat service, and
//! returns `{response}` with the model's reply.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};

use tutoria_types::chat::ChatTurn;

use crate::http::error::AppError;
use crate::state::AppState;

/// Request body for the chat endpoint.
///
/// `message` defaults to empty when the field is absent, so a missing
/// message is reported as the empty-message validation error rather than
/// a body rejection. An absent `history` is treated as empty.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub history: Vec<ChatTurn>,
}

/// Response body: the model's reply text.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

/// POST /chat - Relay one message to the tutor.
///
/// The body is extracted as a `Result` so malformed JSON (including an
/// unrecognized history role) comes back as a 400 with the JSON error
/// envelope instead of axum's default rejection.
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(body) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    let response = state
        .chat_service
        .handle(&body.message, &body.history)
        .await?;

    Ok(Json(ChatResponse { response }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    use tutoria_core::chat::service::ChatService;
    use tutoria_core::llm::box_provider::BoxLlmProvider;
    use tutoria_core::llm::provider::LlmProvider;
    use tutoria_types::error::ChatError;
    use tutoria_types::llm::{GenerationRequest, GenerationResponse, LlmError};

    use crate::http::error::PROVIDER_ERROR;

    use super::*;

    /// Provider double: canned reply, or a provider error when `None`.
    struct MockLlmProvider {
        reply: Option<String>,
        calls: Arc<AtomicUsize>,
    }

    impl LlmProvider for MockLlmProvider {
        fn name(&self) -> &str {
            "mock"
        }

        async fn generate(
            &self,
            _request: &GenerationRequest,
        ) -> Result<GenerationResponse, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.reply {
                Some(text) => Ok(GenerationResponse {
                    text: text.clone(),
                    finish_reason: Some("STOP".to_string()),
                    usage: None,
                }),
                None => Err(LlmError::Provider {
                    message: "boom".to_string(),
                }),
            }
        }
    }

    fn state_with(reply: Option<&str>) -> (AppState, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let mock = MockLlmProvider {
            reply: reply.map(str::to_string),
            calls: Arc::clone(&calls),
        };
        let state = AppState {
            chat_service: Arc::new(ChatService::new(BoxLlmProvider::new(mock))),
        };
        (state, calls)
    }

    #[tokio::test]
    async fn test_chat_returns_reply() {
        let (state, _) = state_with(Some("Olá!"));
        let body = ChatRequest {
            message: "Oi".to_string(),
            history: Vec::new(),
        };

        let Json(response) = chat(State(state), Ok(Json(body))).await.unwrap();
        assert_eq!(response.response, "Olá!");
    }

    #[tokio::test]
    async fn test_chat_empty_message_is_400_without_provider_call() {
        let (state, calls) = state_with(Some("nunca enviado"));
        let body = ChatRequest {
            message: String::new(),
            history: Vec::new(),
        };

        let result = chat(State(state), Ok(Json(body))).await;

        let err = result.err().unwrap();
        assert!(matches!(err, AppError::Chat(ChatError::EmptyMessage)));
        assert_eq!(
            err.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_chat_provider_failure_is_generic_500() {
        let (state, _) = state_with(None);
        let body = ChatRequest {
            message: "Oi".to_string(),
            history: Vec::new(),
        };

        let response = chat(State(state), Ok(Json(body)))
            .await
            .err()
            .unwrap()
            .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"], PROVIDER_ERROR);
    }

    #[test]
    fn test_request_missing_message_defaults_to_empty() {
        let body: ChatRequest = serde_json::from_str(r#"{"history": []}"#).unwrap();
        assert!(body.message.is_empty());
    }

    #[test]
    fn test_request_missing_history_defaults_to_empty() {
        let body: ChatRequest = serde_json::from_str(r#"{"message": "Oi"}"#).unwrap();
        assert!(body.history.is_empty());
    }

    #[test]
    fn test_request_with_unrecognized_role_is_rejected() {
        let result: Result<ChatRequest, _> = serde_json::from_str(
            r#"{"message": "Oi", "history": [{"role": "assistant", "text": "hi"}]}"#,
        );
        assert!(result.is_err());
    }
}
