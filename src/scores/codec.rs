//! JSON text form of [`SavedGameState`].

use super::error::DecodeError;
use crate::game::SavedGameState;

pub fn encode(state: &SavedGameState) -> String {
    serde_json::to_string(state).expect("struct of plain numbers always serializes")
}

/// Parse stored text. Any JSON object carrying the three counters as numbers
/// decodes; extra keys are ignored and values are neither range- nor
/// integer-checked.
pub fn decode(raw: &str) -> Result<SavedGameState, DecodeError> {
    Ok(serde_json::from_str(raw)?)
}

/// Reject counters a well-behaved writer never produces: negative or
/// fractional ones.
pub fn validate(state: SavedGameState) -> Result<SavedGameState, DecodeError> {
    [
        ("playerScore", state.player_score),
        ("computerScore", state.computer_score),
        ("drawCount", state.draw_count),
    ]
    .into_iter()
    .try_for_each(|(field, value)| {
        if !value.is_finite() || value.fract() != 0.0 {
            Err(DecodeError::NotInteger { field, value })
        } else if value < 0.0 {
            Err(DecodeError::Negative { field, value })
        } else {
            Ok(())
        }
    })
    .map(|()| state)
}
