//! Command line access to a scoreboard kept in an on-disk cookie jar.

pub use command::Args;
pub use command::Command;

pub mod command;

use crate::Count;
use crate::cookie::Cookies;
use crate::cookie::FileJar;
use crate::game::SavedGameState;
use crate::scores::Scores;
use colored::*;
use std::io::Write;

pub struct CLI(Scores<Cookies<FileJar>>);

impl CLI {
    pub fn new(args: &Args) -> Self {
        Self(Scores::new(Cookies::new(FileJar::open(&args.jar))))
    }

    pub fn run(self, command: Command, out: &mut impl Write) -> anyhow::Result<()> {
        match command {
            Command::Save {
                player,
                computer,
                draws,
            } => self.save(
                SavedGameState::new(player as Count, computer as Count, draws as Count),
                out,
            ),
            Command::Load { json, strict } => self.load(json, strict, out),
            Command::Clear => self.clear(out),
        }
    }

    fn save(mut self, state: SavedGameState, out: &mut impl Write) -> anyhow::Result<()> {
        self.0.save(&state);
        log::info!("saved to {}", self.0.store().jar().path().display());
        Ok(writeln!(out, "{}", summary(&state))?)
    }

    fn load(self, json: bool, strict: bool, out: &mut impl Write) -> anyhow::Result<()> {
        let scores = if strict { self.0.validated() } else { self.0 };
        match (scores.load(), json) {
            (None, _) => Ok(writeln!(out, "no saved state")?),
            (Some(state), true) => Ok(writeln!(out, "{}", crate::scores::encode(&state))?),
            (Some(state), false) => Ok(writeln!(out, "{}", summary(&state))?),
        }
    }

    fn clear(mut self, out: &mut impl Write) -> anyhow::Result<()> {
        self.0.clear();
        Ok(writeln!(out, "cleared")?)
    }
}

fn summary(state: &SavedGameState) -> String {
    format!(
        "{} {}  {} {}  {} {}",
        "player".green(),
        state.player_score,
        "computer".red(),
        state.computer_score,
        "draws".yellow(),
        state.draw_count
    )
}
