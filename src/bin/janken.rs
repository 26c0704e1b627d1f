//! janken Scoreboard Binary
//!
//! Saves, prints and clears the persisted rock-paper-scissors scoreboard
//! kept in an on-disk cookie jar.

use clap::Parser;
use janken::*;

fn main() -> anyhow::Result<()> {
    log();
    let args = cli::Args::parse();
    cli::CLI::new(&args).run(args.command, &mut std::io::stdout())
}
