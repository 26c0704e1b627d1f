use super::hand::Hand;
use super::outcome::Outcome;
use super::saved::SavedGameState;
use crate::Count;
use serde::Deserialize;
use serde::Serialize;

/// Everything the UI shows for the current round. Only the counters outlive
/// a page load; see [`GameState::saved`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub player_hand: Option<Hand>,
    pub computer_hand: Option<Hand>,
    pub result: Option<Outcome>,
    #[serde(serialize_with = "super::saved::integral")]
    pub player_score: Count,
    #[serde(serialize_with = "super::saved::integral")]
    pub computer_score: Count,
    #[serde(serialize_with = "super::saved::integral")]
    pub draw_count: Count,
}

impl GameState {
    /// The persisted projection of this state.
    pub fn saved(&self) -> SavedGameState {
        SavedGameState::new(self.player_score, self.computer_score, self.draw_count)
    }
}

/// Restoring at startup brings back the counters only. No round is in flight.
impl From<SavedGameState> for GameState {
    fn from(saved: SavedGameState) -> Self {
        Self {
            player_hand: None,
            computer_hand: None,
            result: None,
            player_score: saved.player_score,
            computer_score: saved.computer_score,
            draw_count: saved.draw_count,
        }
    }
}
