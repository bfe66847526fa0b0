//! randtoe - tic-tac-toe against a random computer opponent.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use randtoe::{Console, Settings, run_session};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never mix with the board on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    info!(config = %cli.config.display(), "Starting randtoe");

    let settings =
        Settings::load(&cli.config)?.with_overrides(cli.name, cli.mark, cli.seed);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    let summary = run_session(&mut console, &settings)?;
    info!(rounds = summary.rounds_played, "Goodbye");

    Ok(())
}
