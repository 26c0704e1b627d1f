use serde::Deserialize;
use serde::Serialize;

/// Result of a round from the player's side of the table.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl TryFrom<&str> for Outcome {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "win" => Ok(Self::Win),
            "lose" => Ok(Self::Lose),
            "draw" => Ok(Self::Draw),
            _ => Err(format!("invalid outcome: {}", s)),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Win => write!(f, "win"),
            Self::Lose => write!(f, "lose"),
            Self::Draw => write!(f, "draw"),
        }
    }
}
