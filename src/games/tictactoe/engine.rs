//! Round engine: turn order, scoring and the round state machine.

use super::action::MoveError;
use super::opponent::RandomOpponent;
use super::phases::{Outcome, RoundPhase};
use super::player::Player;
use super::rules;
use super::types::{Board, Mark};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// What happened during one full turn pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// Cell the human played (0-8).
    pub human_cell: usize,
    /// Cell the computer played (0-8).
    pub computer_cell: usize,
    /// Outcome, if the turn ended the round.
    pub outcome: Option<Outcome>,
}

/// Tic-tac-toe engine for a human against a random computer opponent.
///
/// The human always moves first. After each human move the computer answers,
/// and only then is the board evaluated. Scores survive [`GameEngine::reset_board`].
#[derive(Debug, Clone)]
pub struct GameEngine<R = ChaCha8Rng> {
    board: Board,
    human: Player,
    computer: Player,
    opponent: RandomOpponent<R>,
    phase: RoundPhase,
}

impl<R: Rng> GameEngine<R> {
    /// Creates an engine. The computer takes the mark the human did not pick.
    #[instrument(
        skip(human, computer_name, opponent),
        fields(human = %human.name(), mark = %human.mark())
    )]
    pub fn new(
        human: Player,
        computer_name: impl Into<String>,
        opponent: RandomOpponent<R>,
    ) -> Self {
        let computer = Player::new(human.mark().opponent(), computer_name);
        info!(
            computer = %computer.name(),
            computer_mark = %computer.mark(),
            "Engine ready"
        );
        Self {
            board: Board::new(),
            human,
            computer,
            opponent,
            phase: RoundPhase::AwaitingHumanMove,
        }
    }

    /// Places `mark` at `cell` after checking range and occupancy.
    ///
    /// This is the board primitive every move goes through; it does not look
    /// at the round phase.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, cell: usize, mark: Mark) -> Result<(), MoveError> {
        self.board.place(cell, mark).inspect_err(|e| {
            debug!(error = %e, "Move rejected");
        })
    }

    /// Plays the human's mark at `cell` (0-8).
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn apply_human_move(&mut self, cell: usize) -> Result<(), MoveError> {
        self.expect_phase(RoundPhase::AwaitingHumanMove)?;
        self.apply_move(cell, *self.human.mark())?;
        self.phase = RoundPhase::AwaitingComputerMove;
        Ok(())
    }

    /// Draws a cell for the computer without playing it.
    pub fn select_computer_move(&mut self) -> Result<usize, MoveError> {
        self.opponent.select_move(&self.board)
    }

    /// Chooses and plays the computer's move, returning the cell for display.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn run_computer_turn(&mut self) -> Result<usize, MoveError> {
        self.expect_phase(RoundPhase::AwaitingComputerMove)?;
        let cell = self.select_computer_move()?;
        self.apply_move(cell, *self.computer.mark())?;
        self.phase = RoundPhase::Evaluating;
        Ok(cell)
    }

    /// Evaluates the board without touching scores or the phase.
    pub fn check_result(&self) -> Option<Outcome> {
        rules::check_result(&self.board)
    }

    /// Evaluates the board after the computer's move.
    ///
    /// A terminal outcome is scored once and ends the round; otherwise play
    /// returns to the human. Once the round is over this keeps returning the
    /// same outcome without scoring it again. Before both players have moved
    /// it returns `None`.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn evaluate(&mut self) -> Option<Outcome> {
        match self.phase {
            RoundPhase::Evaluating => match self.check_result() {
                Some(outcome) => {
                    self.record_outcome(outcome);
                    self.phase = RoundPhase::RoundOver(outcome);
                    info!(%outcome, "Round over");
                    Some(outcome)
                }
                None => {
                    self.phase = RoundPhase::AwaitingHumanMove;
                    None
                }
            },
            RoundPhase::RoundOver(outcome) => Some(outcome),
            RoundPhase::AwaitingHumanMove | RoundPhase::AwaitingComputerMove => None,
        }
    }

    /// Plays one full turn pair: the human move, the computer reply and the evaluation.
    #[instrument(skip(self))]
    pub fn play_turn(&mut self, cell: usize) -> Result<TurnReport, MoveError> {
        self.apply_human_move(cell)?;
        let computer_cell = self.run_computer_turn()?;
        let outcome = self.evaluate();
        Ok(TurnReport {
            human_cell: cell,
            computer_cell,
            outcome,
        })
    }

    /// Clears the board and starts a new round. Scores are kept.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn reset_board(&mut self) {
        if !self.is_round_over() {
            warn!("Resetting a round that has not finished");
        }
        self.board.clear();
        self.phase = RoundPhase::AwaitingHumanMove;
    }

    fn record_outcome(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(mark) if mark == *self.human.mark() => self.human.record_win(),
            Outcome::Win(_) => self.computer.record_win(),
            Outcome::Tie => {
                self.human.record_tie();
                self.computer.record_tie();
            }
        }
    }

    fn expect_phase(&self, expected: RoundPhase) -> Result<(), MoveError> {
        if self.phase == expected {
            Ok(())
        } else {
            warn!(current = %self.phase, %expected, "Operation out of turn");
            Err(MoveError::OutOfTurn(self.phase))
        }
    }
}

impl<R> GameEngine<R> {
    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the human player.
    pub fn human(&self) -> &Player {
        &self.human
    }

    /// Returns the computer player.
    pub fn computer(&self) -> &Player {
        &self.computer
    }

    /// Both players, human first.
    pub fn players(&self) -> [&Player; 2] {
        [&self.human, &self.computer]
    }

    /// Returns the player holding `mark`.
    pub fn player_with_mark(&self, mark: Mark) -> &Player {
        if *self.human.mark() == mark {
            &self.human
        } else {
            &self.computer
        }
    }

    /// Returns the current phase.
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Returns true once the round has an outcome.
    pub fn is_round_over(&self) -> bool {
        matches!(self.phase, RoundPhase::RoundOver(_))
    }

    /// Returns the outcome of the finished round.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            RoundPhase::RoundOver(outcome) => Some(outcome),
            _ => None,
        }
    }
}

impl GameEngine<ChaCha8Rng> {
    /// Creates an engine whose opponent replays the same moves for the same seed.
    pub fn seeded(human: Player, computer_name: impl Into<String>, seed: u64) -> Self {
        Self::new(human, computer_name, RandomOpponent::seeded(seed))
    }
}
