//! Score persistence under the fixed [`STATE_KEY`](crate::STATE_KEY).
//!
//! The stored record is either absent or present. `save` always leaves it
//! present with the new counters, `clear` always leaves it absent, and
//! `load` only looks. Text that fails to decode counts as absent: the error
//! goes to the diagnostic sink and the caller sees `None`.

pub use codec::decode;
pub use codec::encode;
pub use codec::validate;
pub use error::DecodeError;

pub mod codec;
pub mod error;

use crate::game::GameState;
use crate::game::SavedGameState;
use crate::store::Store;

/// Receives decode failures that `load` swallows.
pub type Sink = Box<dyn Fn(&DecodeError)>;

/// Default sink: error-level log line.
pub fn report(error: &DecodeError) {
    log::error!("failed to parse game state from cookie: {}", error);
}

pub struct Scores<S: Store> {
    store: S,
    sink: Sink,
    strict: bool,
}

impl<S: Store> Scores<S> {
    pub fn new(store: S) -> Self {
        Self::with_sink(store, report)
    }

    pub fn with_sink(store: S, sink: impl Fn(&DecodeError) + 'static) -> Self {
        Self {
            store,
            sink: Box::new(sink),
            strict: false,
        }
    }

    /// Also treat negative counters as a decode failure.
    pub fn validated(self) -> Self {
        Self {
            strict: true,
            ..self
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
    pub fn into_inner(self) -> S {
        self.store
    }

    /// Overwrite the stored scoreboard.
    pub fn save(&mut self, state: &SavedGameState) {
        log::debug!("saving {}", state);
        self.store.set(crate::STATE_KEY, &encode(state), crate::STATE_TTL_DAYS);
    }

    /// The stored scoreboard, or `None` if there is none or it is unreadable.
    pub fn load(&self) -> Option<SavedGameState> {
        let raw = self.store.get(crate::STATE_KEY).filter(|raw| !raw.is_empty())?;
        match self.decode(&raw) {
            Ok(state) => Some(state),
            Err(e) => {
                (self.sink)(&e);
                None
            }
        }
    }

    /// Remove the stored scoreboard. Safe to call when nothing is stored.
    pub fn clear(&mut self) {
        log::debug!("clearing saved game state");
        self.store.delete(crate::STATE_KEY);
    }

    /// Persist the counters of a live game.
    pub fn record(&mut self, game: &GameState) {
        self.save(&game.saved());
    }

    /// Startup state: saved counters if any, otherwise a fresh game.
    pub fn restore(&self) -> GameState {
        self.load().map(GameState::from).unwrap_or_default()
    }

    fn decode(&self, raw: &str) -> Result<SavedGameState, DecodeError> {
        if self.strict {
            decode(raw).and_then(validate)
        } else {
            decode(raw)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cookie::Cookies;
    use crate::cookie::Jar;
    use crate::cookie::MemoryJar;
    use crate::game::Hand;
    use crate::game::Outcome;
    use crate::store::MemoryStore;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn scores() -> Scores<Cookies<MemoryJar>> {
        Scores::new(Cookies::new(MemoryJar::new()))
    }

    /// Scores whose sink collects rendered errors.
    fn observed() -> (Scores<Cookies<MemoryJar>>, Rc<RefCell<Vec<String>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let scores = Scores::with_sink(Cookies::new(MemoryJar::new()), move |e| {
            sink.borrow_mut().push(e.to_string())
        });
        (scores, seen)
    }

    #[test]
    fn load_after_save_returns_saved() {
        let mut scores = scores();
        for state in [
            SavedGameState::default(),
            SavedGameState::new(7, 3, 2),
            SavedGameState::new(crate::COUNT_MAX, 0, 1),
        ] {
            scores.save(&state);
            assert_eq!(scores.load(), Some(state));
        }
    }

    #[test]
    fn clear_leaves_nothing() {
        let mut scores = scores();
        scores.save(&SavedGameState::new(1, 2, 3));
        scores.clear();
        assert_eq!(scores.load(), None);
        assert_eq!(scores.store().get(crate::STATE_KEY), None);
    }

    #[test]
    fn clear_on_empty_store_is_a_no_op() {
        let mut scores = scores();
        scores.clear();
        scores.clear();
        assert_eq!(scores.load(), None);
        assert_eq!(scores.store().jar().cookie(), "");
    }

    #[test]
    fn corrupt_text_reads_as_absent() {
        let (mut scores, seen) = observed();
        scores.store_mut().set(crate::STATE_KEY, "{not json", 1);
        assert_eq!(scores.load(), None);
        assert_eq!(seen.borrow().len(), 1);
        assert!(seen.borrow()[0].starts_with("malformed game state"));
    }

    #[test]
    fn empty_value_reads_as_absent_without_report() {
        let (mut scores, seen) = observed();
        scores.store_mut().set(crate::STATE_KEY, "", 1);
        assert_eq!(scores.load(), None);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn second_save_replaces_first() {
        let mut scores = scores();
        scores.save(&SavedGameState::new(9, 9, 9));
        scores.save(&SavedGameState::new(1, 0, 0));
        assert_eq!(scores.load(), Some(SavedGameState::new(1, 0, 0)));
        assert_eq!(scores.store().jar().entries().count(), 1);
    }

    #[test]
    fn saves_under_fixed_key_for_a_year() {
        let mut store = MemoryStore::new();
        Scores::new(&mut store).save(&SavedGameState::new(1, 2, 3));
        assert_eq!(store.ttl("janken-game-state"), Some(365));
        let raw = store.get("janken-game-state").unwrap();
        assert_eq!(decode(&raw).unwrap(), SavedGameState::new(1, 2, 3));
    }

    #[test]
    fn neighbouring_cookies_are_untouched() {
        let mut scores = scores();
        scores.store_mut().set("janken-game-state-old", "x", 1);
        scores.store_mut().set("theme", "dark", 1);
        scores.save(&SavedGameState::new(2, 2, 2));
        scores.clear();
        assert_eq!(scores.load(), None);
        assert_eq!(
            scores.store().jar().cookie(),
            "janken-game-state-old=x; theme=dark"
        );
    }

    #[test]
    fn negative_counters_pass_unless_validated() {
        let raw = r#"{"playerScore":-1,"computerScore":0,"drawCount":0}"#;
        let (mut scores, seen) = observed();
        scores.store_mut().set(crate::STATE_KEY, raw, 1);
        assert_eq!(scores.load(), Some(SavedGameState::new(-1, 0, 0)));
        let scores = scores.validated();
        assert_eq!(scores.load(), None);
        assert_eq!(seen.borrow().as_slice(), ["negative playerScore: -1"]);
    }

    #[test]
    fn non_integer_numbers_pass_unless_validated() {
        let (mut scores, seen) = observed();
        scores.store_mut().set(
            crate::STATE_KEY,
            r#"{"playerScore":1.5,"computerScore":1e2,"drawCount":3.0}"#,
            1,
        );
        assert_eq!(scores.load(), Some(SavedGameState::new(1.5, 100, 3)));
        assert!(seen.borrow().is_empty());
        let scores = scores.validated();
        assert_eq!(scores.load(), None);
        assert_eq!(seen.borrow().as_slice(), ["fractional playerScore: 1.5"]);
    }

    #[test]
    fn integral_spellings_pass_validation() {
        let (mut scores, seen) = observed();
        scores.store_mut().set(
            crate::STATE_KEY,
            r#"{"playerScore":1e2,"computerScore":3.0,"drawCount":9223372036854775808}"#,
            1,
        );
        let scores = scores.validated();
        assert_eq!(
            scores.load(),
            Some(SavedGameState::new(100, 3, 9223372036854775808.))
        );
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn record_and_restore_carry_counters_only() {
        let mut scores = scores();
        assert_eq!(scores.restore(), GameState::default());
        scores.record(&GameState {
            player_hand: Some(Hand::Paper),
            computer_hand: Some(Hand::Rock),
            result: Some(Outcome::Win),
            player_score: 1.,
            computer_score: 0.,
            draw_count: 0.,
        });
        let restored = scores.restore();
        assert_eq!(restored.result, None);
        assert_eq!(restored.saved(), SavedGameState::new(1, 0, 0));
    }
}
