//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Square};
use tracing::instrument;

/// The eight lines of three, in the order they are checked:
/// rows, then columns, then diagonals.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

const CENTER: usize = 4;
const DIAGONALS_START: usize = 6;

/// Returns the mark of the first completed line, if any.
///
/// Rows are checked first, then columns, then the two diagonals. The
/// diagonals are only examined when the center square holds a mark.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    let straight = LINES[..DIAGONALS_START]
        .iter()
        .find_map(|line| line_owner(board, line));
    if straight.is_some() {
        return straight;
    }

    if board.is_empty(CENTER) {
        return None;
    }

    LINES[DIAGONALS_START..]
        .iter()
        .find_map(|line| line_owner(board, line))
}

/// Mark holding all three squares of `line`.
fn line_owner(board: &Board, &[a, b, c]: &[usize; 3]) -> Option<Mark> {
    match board.get(a)? {
        Square::Occupied(mark)
            if board.get(b) == Some(Square::Occupied(mark))
                && board.get(c) == Some(Square::Occupied(mark)) =>
        {
            Some(mark)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_wins() {
        for mark in [Mark::X, Mark::O] {
            for line in LINES {
                let mut board = Board::new();
                for pos in line {
                    board.place(pos, mark).unwrap();
                }
                assert_eq!(check_winner(&board), Some(mark), "line {:?}", line);
            }
        }
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let board: Board = "XXO ___ ___".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_order_wins() {
        // Two completed lines are only reachable by hand.
        let board: Board = "OOO XXX ___".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Mark::O));

        let board: Board = "XO_ XO_ XO_".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Mark::X));
    }
}
