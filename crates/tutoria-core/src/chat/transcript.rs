//! Deterministic transcript assembly.

use tutoria_types::chat::ChatTurn;

use super::preamble::system_preamble;

/// Assemble the full transcript for one request.
///
/// Layout is fixed: the two preamble turns at positions 0 and 1, the
/// caller's history in its original order, then the new message as the
/// final user turn.
pub fn build_transcript(history: &[ChatTurn], message: &str) -> Vec<ChatTurn> {
    let mut transcript = Vec::with_capacity(2 + history.len() + 1);
    transcript.extend(system_preamble());
    transcript.extend_from_slice(history);
    transcript.push(ChatTurn::user(message));
    transcript
}
