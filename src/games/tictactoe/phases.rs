//! Round outcome and the phases of a round.

use super::Mark;
use serde::{Deserialize, Serialize};

/// Outcome of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The player holding this mark completed a line.
    Win(Mark),
    /// The round ended without a winner.
    Tie,
}

impl Outcome {
    /// Returns the winning mark if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(*mark),
            Outcome::Tie => None,
        }
    }

    /// Returns true if the round was a tie.
    pub fn is_tie(&self) -> bool {
        matches!(self, Outcome::Tie)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win(mark) => write!(f, "{} wins", mark),
            Outcome::Tie => write!(f, "Tie"),
        }
    }
}

/// Where a round currently stands.
///
/// The engine moves through these in order:
/// `AwaitingHumanMove -> AwaitingComputerMove -> Evaluating`, then either back
/// to `AwaitingHumanMove` or on to `RoundOver`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum RoundPhase {
    /// Waiting for the human to pick a cell.
    #[default]
    #[display("awaiting the human move")]
    AwaitingHumanMove,
    /// The human has moved; the computer moves next.
    #[display("awaiting the computer move")]
    AwaitingComputerMove,
    /// Both players have moved; the board must be evaluated.
    #[display("evaluating the board")]
    Evaluating,
    /// The round has ended.
    #[display("the round is over ({})", _0)]
    RoundOver(Outcome),
}

