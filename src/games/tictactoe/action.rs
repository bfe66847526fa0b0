//! Move errors for tic-tac-toe.
//!
//! Every rejection is recoverable: the caller re-prompts and tries again.

use super::phases::RoundPhase;

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell index is outside 0-8.
    #[display("Cell {} is outside the board (0-8)", _0)]
    OutOfRange(usize),

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),

    /// The operation does not belong to the current round phase.
    #[display("Not allowed while {}", _0)]
    OutOfTurn(RoundPhase),

    /// No empty cell is left for the computer.
    #[display("Board is full")]
    BoardFull,
}

impl std::error::Error for MoveError {}

impl MoveError {
    /// Returns true for errors caused by the chosen cell, which a new choice can fix.
    pub fn is_bad_cell(&self) -> bool {
        matches!(self, MoveError::OutOfRange(_) | MoveError::CellOccupied(_))
    }
}
