//! Application error type mapping to HTTP status codes and the JSON
//! error envelope.
//!
//! The caller always receives `{"error": "..."}`. Validation failures
//! carry their reason verbatim; every provider failure collapses into
//! one fixed generic message, with the distinguishing detail emitted to
//! the diagnostic log only.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use tutoria_types::error::ChatError;

/// Caller-visible reason for a missing or empty message.
pub const EMPTY_MESSAGE_ERROR: &str = "Mensagem é obrigatória.";

/// Caller-visible message for any provider failure.
pub const PROVIDER_ERROR: &str = "Erro ao processar sua requisição com a IA.";

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Chat relay errors.
    Chat(ChatError),
    /// Malformed request body (invalid JSON, unrecognized role, ...).
    Validation(String),
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        AppError::Chat(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Chat(ChatError::EmptyMessage) => {
                (StatusCode::BAD_REQUEST, EMPTY_MESSAGE_ERROR.to_string())
            }
            AppError::Chat(ChatError::Provider(e)) => {
                // The detail stays here; the caller sees a stable
                // generic message.
                tracing::error!(error = %e, "provider call failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    PROVIDER_ERROR.to_string(),
                )
            }
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use tutoria_types::llm::LlmError;

    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_empty_message_maps_to_400() {
        let response = AppError::Chat(ChatError::EmptyMessage).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], EMPTY_MESSAGE_ERROR);
    }

    #[tokio::test]
    async fn test_any_provider_error_maps_to_generic_500() {
        for err in [
            LlmError::Timeout,
            LlmError::AuthenticationFailed,
            LlmError::RateLimited,
            LlmError::EmptyResponse,
            LlmError::Provider {
                message: "HTTP 503".to_string(),
            },
        ] {
            let response = AppError::Chat(ChatError::Provider(err)).into_response();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body_json(response).await["error"], PROVIDER_ERROR);
        }
    }

    #[tokio::test]
    async fn test_validation_reason_is_surfaced_verbatim() {
        let response = AppError::Validation("campo inesperado".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "campo inesperado");
    }
}
