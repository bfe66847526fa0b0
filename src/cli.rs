//! Command-line interface for randtoe.

use clap::Parser;
use randtoe::Mark;
use std::path::PathBuf;

/// Tic-tac-toe against a computer that plays random moves
#[derive(Parser, Debug)]
#[command(name = "randtoe")]
#[command(about = "Play tic-tac-toe against a random computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (ignored if missing)
    #[arg(short, long, default_value = "randtoe.toml")]
    pub config: PathBuf,

    /// Your player name (skips the name prompt)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Your mark, X or O (skips the mark prompt)
    #[arg(short, long)]
    pub mark: Option<Mark>,

    /// Seed for the computer's moves, for repeatable sessions
    #[arg(long)]
    pub seed: Option<u64>,
}
