//! Players and their cumulative scores.

use super::Mark;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Cumulative score, counted in half points so ties stay exact.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Score {
    half_points: u32,
}

impl Score {
    /// A score of zero.
    pub const ZERO: Score = Score { half_points: 0 };

    /// Score as points: 1 per win, 0.5 per tie.
    pub fn points(self) -> f64 {
        f64::from(self.half_points) / 2.0
    }

    /// Score as a count of half points.
    pub fn half_points(self) -> u32 {
        self.half_points
    }
}

/// Prints whole scores without a fraction (`1`, `0.5`, `1.5`).
impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.half_points / 2;
        if self.half_points % 2 == 0 {
            write!(f, "{}", whole)
        } else {
            write!(f, "{}.5", whole)
        }
    }
}

/// A participant in the session.
///
/// Name and mark are fixed at creation; the score only moves through
/// [`Player::record_win`] and [`Player::record_tie`].
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Display name.
    name: String,
    /// Mark placed on the board.
    mark: Mark,
    /// Points accumulated across rounds.
    score: Score,
}

impl Player {
    /// Creates a player with a score of zero.
    #[instrument(skip(name))]
    pub fn new(mark: Mark, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mark,
            score: Score::ZERO,
        }
    }

    /// Adds one point.
    pub fn record_win(&mut self) {
        self.score.half_points = self.score.half_points.saturating_add(2);
        debug!(player = %self.name, score = %self.score, "Win recorded");
    }

    /// Adds half a point.
    pub fn record_tie(&mut self) {
        self.score.half_points = self.score.half_points.saturating_add(1);
        debug!(player = %self.name, score = %self.score, "Tie recorded");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_player_has_zero_score() {
        let player = Player::new(Mark::X, "Ana");
        assert_eq!(player.name(), "Ana");
        assert_eq!(*player.mark(), Mark::X);
        assert_eq!(*player.score(), Score::ZERO);
    }

    #[test]
    fn test_score_display() {
        let mut player = Player::new(Mark::O, "Computer");
        assert_eq!(player.score().to_string(), "0");
        player.record_tie();
        assert_eq!(player.score().to_string(), "0.5");
        player.record_win();
        assert_eq!(player.score().to_string(), "1.5");
        player.record_tie();
        assert_eq!(player.score().to_string(), "2");
    }

    #[test]
    fn test_score_saturates_instead_of_overflowing() {
        let mut player = Player::new(Mark::X, "Ana");
        player.score = Score {
            half_points: u32::MAX - 1,
        };
        player.record_win();
        assert_eq!(player.score().half_points(), u32::MAX);
        player.record_tie();
        assert_eq!(player.score().half_points(), u32::MAX);
    }

    proptest! {
        #[test]
        fn score_is_wins_plus_half_ties(wins in 0u32..200, ties in 0u32..200) {
            let mut player = Player::new(Mark::X, "Ana");
            for _ in 0..wins {
                player.record_win();
            }
            for _ in 0..ties {
                player.record_tie();
            }
            prop_assert_eq!(
                player.score().points(),
                f64::from(wins) + 0.5 * f64::from(ties)
            );
        }
    }
}
