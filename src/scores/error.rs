use crate::Count;

/// Why a stored scoreboard could not be read back.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("malformed game state: {0}")]
    Json(#[from] serde_json::Error),
    #[error("negative {field}: {value}")]
    Negative { field: &'static str, value: Count },
    #[error("fractional {field}: {value}")]
    NotInteger { field: &'static str, value: Count },
}
