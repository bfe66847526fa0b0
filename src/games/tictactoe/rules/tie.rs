//! Tie detection for tic-tac-toe.

use super::super::Board;
use super::win::check_winner;
use tracing::instrument;

/// A round with no completed line is a tie once fewer than this many squares
/// remain empty.
///
/// This ends some rounds before the board is full (two empty squares is
/// already a tie).
pub const TIE_EMPTY_THRESHOLD: usize = 3;

/// Checks for a tie: no completed line and fewer than
/// [`TIE_EMPTY_THRESHOLD`] empty squares.
#[instrument(skip(board))]
pub fn is_tie(board: &Board) -> bool {
    board.empty_count() < TIE_EMPTY_THRESHOLD && check_winner(board).is_none()
}
