//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]; scoring and turn order live in the engine.

pub mod tie;
pub mod win;

pub use tie::{TIE_EMPTY_THRESHOLD, is_tie};
pub use win::{LINES, check_winner};

use super::{Board, Outcome};
use tracing::{debug, instrument};

/// Evaluates the board for a terminal condition.
///
/// Lines are checked before the tie rule, so a completed line always wins.
/// Returns `None` while the round should continue.
#[instrument(skip(board))]
pub fn check_result(board: &Board) -> Option<Outcome> {
    if let Some(mark) = check_winner(board) {
        debug!(%mark, "Line completed");
        return Some(Outcome::Win(mark));
    }

    if is_tie(board) {
        debug!(empty = board.empty_count(), "Tie declared");
        return Some(Outcome::Tie);
    }

    None
}
