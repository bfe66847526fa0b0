//! randtoe - tic-tac-toe against a random computer opponent
//!
//! A human plays a 3x3 board against a computer that picks uniformly random
//! empty cells. Scores carry over from round to round until the human stops.
//!
//! # Architecture
//!
//! - **Engine**: board, move validation, win/tie rules, scoring and the round
//!   state machine ([`GameEngine`])
//! - **Console**: prompts and rendering over any reader/writer pair
//! - **Session**: the loop tying the two together ([`run_session`])
//! - **Settings**: TOML configuration ([`Settings`])
//!
//! # Example
//!
//! ```
//! use randtoe::{GameEngine, Mark, Player};
//!
//! let mut engine = GameEngine::seeded(Player::new(Mark::X, "Ana"), "Computer", 7);
//! let report = engine.play_turn(4).unwrap();
//! assert_ne!(report.computer_cell, 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod console;
mod games;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, Settings};

// Crate-level exports - Console
pub use console::{Console, results_table};

// Crate-level exports - Session
pub use session::{SessionSummary, run_session};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    BOARD_CELLS, Board, GameEngine, Mark, MoveError, Outcome, ParseBoardError, Player,
    RandomOpponent, RoundPhase, Score, Square, TurnReport, rules,
};
