//! Session loop: setup, rounds, results and play-again.

use crate::config::Settings;
use crate::console::Console;
use crate::games::tictactoe::{GameEngine, Player, RandomOpponent};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// What a finished session leaves behind.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    /// Rounds that reached an outcome.
    pub rounds_played: u32,
    /// Final standings, human first. Empty if the game never began.
    pub players: Vec<Player>,
}

impl SessionSummary {
    fn declined() -> Self {
        Self {
            rounds_played: 0,
            players: Vec::new(),
        }
    }
}

/// Runs a whole session on `console`.
///
/// The session ends when the human declines to begin or to play again, or
/// when input runs out.
#[instrument(skip(console, settings))]
pub fn run_session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    settings: &Settings,
) -> Result<SessionSummary> {
    console.print_banner().context("Failed to print banner")?;

    if !console.decision("Begin game? (y/n)")? {
        info!("Player declined to begin");
        return Ok(SessionSummary::declined());
    }

    let Some(human) = setup_human(console, settings)? else {
        info!("Input ended during setup");
        return Ok(SessionSummary::declined());
    };

    let opponent = match settings.seed() {
        Some(seed) => RandomOpponent::seeded(*seed),
        None => RandomOpponent::from_entropy(),
    };
    let mut engine = GameEngine::new(human, settings.computer_name().clone(), opponent);

    console.print_begin()?;
    console.render_board(engine.board())?;

    let mut rounds_played = 0;
    loop {
        let Some(cell) = console.read_move(engine.board(), *engine.human().mark())? else {
            info!("Input ended mid-round");
            break;
        };

        if let Err(e) = engine.apply_human_move(cell) {
            if e.is_bad_cell() {
                warn!(error = %e, "Console let an invalid move through");
                console.message(&format!("Invalid answer! {}", e))?;
                continue;
            }
            return Err(e).context("Human move rejected");
        }

        let computer_cell = engine
            .run_computer_turn()
            .context("Computer could not move")?;
        debug!(cell, computer_cell, "Turn played");
        console.render_board(engine.board())?;

        let Some(outcome) = engine.evaluate() else {
            continue;
        };

        rounds_played += 1;
        let winner = outcome.winner().map(|mark| engine.player_with_mark(mark));
        console.announce(outcome, winner)?;
        console.print_results(&engine.players())?;

        if !console.decision("Play again?")? {
            break;
        }
        engine.reset_board();
        console.render_board(engine.board())?;
    }

    info!(rounds_played, "Session over");
    Ok(SessionSummary {
        rounds_played,
        players: engine.players().into_iter().cloned().collect(),
    })
}

/// Builds the human player from settings, asking for whatever is missing.
fn setup_human<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    settings: &Settings,
) -> Result<Option<Player>> {
    let name = match settings.player_name() {
        Some(name) => name.clone(),
        None => match console.ask_name()? {
            Some(name) => name,
            None => return Ok(None),
        },
    };

    let mark = match settings.mark() {
        Some(mark) => *mark,
        None => match console.ask_mark(&name)? {
            Some(mark) => mark,
            None => return Ok(None),
        },
    };

    info!(%name, %mark, "Human player ready");
    Ok(Some(Player::new(mark, name)))
}
