use clap::Parser;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Keep janken scores in a cookie jar", long_about = None)]
pub struct Args {
    /// Cookie jar file
    #[arg(long, global = true, env = "JANKEN_JAR", default_value = crate::JAR_PATH)]
    pub jar: PathBuf,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    #[command(about = "Overwrite the saved scoreboard", alias = "s")]
    Save {
        #[arg(required = true)]
        player: u64,
        #[arg(required = true)]
        computer: u64,
        #[arg(required = true)]
        draws: u64,
    },
    #[command(about = "Print the saved scoreboard", alias = "l")]
    Load {
        /// Print the stored JSON instead of a summary
        #[arg(long)]
        json: bool,
        /// Treat negative counters as corrupt
        #[arg(long)]
        strict: bool,
    },
    #[command(about = "Forget the saved scoreboard", alias = "c")]
    Clear,
}
