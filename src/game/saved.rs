use crate::Count;
use serde::Deserialize;
use serde::Serialize;
use serde::Serializer;

/// The persisted scoreboard.
///
/// Counters are non-negative integers whenever we write them. Nothing
/// re-checks that on the way back in unless the caller opts into validation,
/// so a hand-edited cookie can surface negative or fractional values here.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedGameState {
    #[serde(serialize_with = "integral")]
    pub player_score: Count,
    #[serde(serialize_with = "integral")]
    pub computer_score: Count,
    #[serde(serialize_with = "integral")]
    pub draw_count: Count,
}

/// Whole counts go out as JSON integers (`3`, not `3.0`), the way
/// `JSON.stringify` writes them.
pub(crate) fn integral<S: Serializer>(count: &Count, serializer: S) -> Result<S::Ok, S::Error> {
    if count.fract() == 0.0 && count.abs() <= crate::COUNT_MAX {
        serializer.serialize_i64(*count as i64)
    } else {
        serializer.serialize_f64(*count)
    }
}

impl SavedGameState {
    pub fn new(
        player_score: impl Into<Count>,
        computer_score: impl Into<Count>,
        draw_count: impl Into<Count>,
    ) -> Self {
        Self {
            player_score: player_score.into(),
            computer_score: computer_score.into(),
            draw_count: draw_count.into(),
        }
    }
    /// Total rounds played.
    pub fn rounds(&self) -> Count {
        self.player_score + self.computer_score + self.draw_count
    }
}

impl std::fmt::Display for SavedGameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "player {} / computer {} / draws {}",
            self.player_score, self.computer_score, self.draw_count
        )
    }
}
