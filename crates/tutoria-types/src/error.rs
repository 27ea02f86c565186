use thiserror::Error;

use crate::llm::LlmError;

/// Errors from handling one chat relay request.
#[derive(Debug, Error)]
pub enum ChatError {
    /// The caller sent a missing or empty message. Detected before any
    /// provider call is made.
    #[error("message is required")]
    EmptyMessage,

    /// The upstream provider call failed. Terminal for the request; the
    /// distinguishing detail stays in the diagnostic log.
    #[error(transparent)]
    Provider(#[from] LlmError),
}
