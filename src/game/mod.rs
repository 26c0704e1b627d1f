//! Data shapes shared with the UI layer.
//!
//! Only [`SavedGameState`] is persisted. The hands and the round result in
//! [`GameState`] live for one render and are never written anywhere.

pub use hand::Hand;
pub use outcome::Outcome;
pub use saved::SavedGameState;
pub use state::GameState;

pub mod hand;
pub mod outcome;
pub mod saved;
pub mod state;
