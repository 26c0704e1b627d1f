//! Score persistence for a browser rock-paper-scissors game.
//!
//! Scores are kept as a small JSON record inside a cookie. The cookie jar is
//! injected, so the same persistence layer runs against `document.cookie` in
//! the browser, an in-memory jar in tests, or a file on disk from the CLI.

pub mod cookie;
pub mod game;
pub mod scores;
pub mod store;

#[cfg(feature = "native")]
pub mod cli;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use cookie::Cookies;
pub use cookie::Jar;
pub use game::GameState;
pub use game::SavedGameState;
pub use scores::DecodeError;
pub use scores::Scores;
pub use store::Store;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Win, loss and draw tallies. Held as a JS number so that whatever a stored
/// record carries, negative or fractional, reaches the caller unchanged.
pub type Count = f64;
/// Largest count a JS number holds exactly.
pub const COUNT_MAX: Count = 9007199254740991.;
/// Cookie lifetimes, measured in whole days from the moment of writing.
pub type Days = i64;

// ============================================================================
// PERSISTENCE PARAMETERS
// ============================================================================
/// Cookie name under which the saved scoreboard lives.
pub const STATE_KEY: &str = "janken-game-state";
/// Lifetime of the saved scoreboard. Not renewed on read.
pub const STATE_TTL_DAYS: Days = 365;
/// Lifetime of a cookie written without an explicit lifetime.
pub const DEFAULT_TTL_DAYS: Days = 30;
/// Path attribute attached to every cookie we write.
pub const COOKIE_PATH: &str = "/";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Default location of the on-disk cookie jar used by the CLI.
#[cfg(feature = "native")]
pub const JAR_PATH: &str = "janken.cookies";

/// Initialize terminal logging at INFO.
#[cfg(feature = "native")]
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
