//! Tic-tac-toe against a random computer opponent.

mod action;
mod engine;
mod opponent;
mod phases;
mod player;
pub mod rules;
mod types;

pub use action::MoveError;
pub use engine::{GameEngine, TurnReport};
pub use opponent::RandomOpponent;
pub use phases::{Outcome, RoundPhase};
pub use player::{Player, Score};
pub use types::{BOARD_CELLS, Board, Mark, ParseBoardError, Square};
