//! The computer opponent: uniform random play by rejection sampling.

use super::action::MoveError;
use super::types::{BOARD_CELLS, Board};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument, trace};

/// Picks moves by drawing cells uniformly from 0-8 until an empty one turns up.
///
/// Every draw is independent and covers all nine cells, so the expected number
/// of draws grows as the board fills. The generator is seeded once and shared
/// by every round of a session.
#[derive(Debug, Clone)]
pub struct RandomOpponent<R = ChaCha8Rng> {
    rng: R,
}

impl RandomOpponent<ChaCha8Rng> {
    /// Creates an opponent with a fixed seed; the same seed replays the same moves.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates an opponent seeded from operating system entropy.
    #[instrument]
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> RandomOpponent<R> {
    /// Creates an opponent drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Chooses an empty cell.
    ///
    /// Returns [`MoveError::BoardFull`] when no cell is empty.
    #[instrument(skip(self, board))]
    pub fn select_move(&mut self, board: &Board) -> Result<usize, MoveError> {
        if board.empty_count() == 0 {
            return Err(MoveError::BoardFull);
        }

        let mut draws = 1u32;
        loop {
            let cell = self.rng.gen_range(0..BOARD_CELLS);
            if board.is_empty(cell) {
                debug!(cell, draws, "Computer picked a cell");
                return Ok(cell);
            }
            trace!(cell, "Drew an occupied cell, drawing again");
            draws += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Mark;
    use proptest::prelude::*;

    #[test]
    fn test_single_empty_cell_is_found() {
        let board: Board = "XOX OXO OX_".parse().unwrap();
        let mut opponent = RandomOpponent::seeded(7);
        assert_eq!(opponent.select_move(&board), Ok(8));
    }

    #[test]
    fn test_full_board_is_rejected() {
        let board: Board = "XOX OXO OXO".parse().unwrap();
        let mut opponent = RandomOpponent::seeded(7);
        assert_eq!(opponent.select_move(&board), Err(MoveError::BoardFull));
    }

    #[test]
    fn test_same_seed_same_moves() {
        let mut a = RandomOpponent::seeded(42);
        let mut b = RandomOpponent::seeded(42);
        let mut board = Board::new();
        for _ in 0..BOARD_CELLS {
            let cell = a.select_move(&board).unwrap();
            assert_eq!(b.select_move(&board), Ok(cell));
            board.place(cell, Mark::O).unwrap();
        }
        assert_eq!(board.empty_count(), 0);
    }

    #[test]
    fn test_every_cell_reachable_on_empty_board() {
        let mut opponent = RandomOpponent::seeded(1);
        let board = Board::new();
        let mut seen = [false; BOARD_CELLS];
        for _ in 0..1000 {
            seen[opponent.select_move(&board).unwrap()] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_redraws_until_first_empty_cell() {
        // Seven occupied cells: most seeds draw an occupied cell first.
        let board: Board = "XOX OX_ OX_".parse().unwrap();
        let mut redrawn = 0;

        for seed in 0..64 {
            let mut opponent = RandomOpponent::seeded(seed);
            let mut stream = ChaCha8Rng::seed_from_u64(seed);

            let mut draws = 0;
            let expected = loop {
                draws += 1;
                let cell = stream.gen_range(0..BOARD_CELLS);
                if board.is_empty(cell) {
                    break cell;
                }
            };
            if draws > 1 {
                redrawn += 1;
            }

            assert_eq!(opponent.select_move(&board), Ok(expected), "seed {seed}");
            // Both generators consumed the same number of draws.
            assert_eq!(
                opponent.rng.gen_range(0..BOARD_CELLS),
                stream.gen_range(0..BOARD_CELLS),
                "seed {seed}"
            );
        }

        assert!(redrawn > 0);
    }

    fn marks() -> impl Strategy<Value = Vec<Option<Mark>>> {
        prop::collection::vec(
            prop_oneof![Just(None), Just(Some(Mark::X)), Just(Some(Mark::O))],
            BOARD_CELLS,
        )
    }

    proptest! {
        #[test]
        fn never_picks_an_occupied_cell(cells in marks(), seed in any::<u64>()) {
            let mut board = Board::new();
            for (pos, mark) in cells.iter().enumerate() {
                if let Some(mark) = mark {
                    board.place(pos, *mark).unwrap();
                }
            }
            prop_assume!(board.empty_count() > 0);

            let mut opponent = RandomOpponent::seeded(seed);
            let cell = opponent.select_move(&board).unwrap();
            prop_assert!(board.is_empty(cell));
        }
    }
}
