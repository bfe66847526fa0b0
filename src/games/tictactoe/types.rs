//! Core domain types for tic-tac-toe.

use super::action::MoveError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Number of cells on the board.
pub const BOARD_CELLS: usize = 9;

/// Mark placed on the board by a player.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// The X mark.
    #[display("X")]
    #[serde(alias = "x")]
    X,
    /// The O mark. A zero is accepted as an O when parsing.
    #[display("O")]
    #[serde(alias = "o", alias = "0")]
    #[strum(serialize = "O", serialize = "0")]
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square holding a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark in this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Square::Empty => write!(f, " "),
            Square::Occupied(mark) => write!(f, "{}", mark),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; BOARD_CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; BOARD_CELLS],
        }
    }

    /// Creates a board from raw squares.
    ///
    /// No turn-order checks are made, so any arrangement is accepted.
    pub fn from_squares(squares: [Square; BOARD_CELLS]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position (0-8).
    pub fn get(&self, pos: usize) -> Option<Square> {
        self.squares.get(pos).copied()
    }

    /// Checks if a square is empty. Out-of-range positions are never empty.
    pub fn is_empty(&self, pos: usize) -> bool {
        matches!(self.get(pos), Some(Square::Empty))
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; BOARD_CELLS] {
        &self.squares
    }

    /// Number of empty squares.
    pub fn empty_count(&self) -> usize {
        self.squares.iter().filter(|s| **s == Square::Empty).count()
    }

    /// Number of squares holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }

    /// Places `mark` at `pos`.
    ///
    /// Fails with [`MoveError::OutOfRange`] outside 0-8 and with
    /// [`MoveError::CellOccupied`] if the square already holds a mark.
    /// On success exactly one square changes.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: usize, mark: Mark) -> Result<(), MoveError> {
        match self.squares.get_mut(pos) {
            None => Err(MoveError::OutOfRange(pos)),
            Some(Square::Occupied(_)) => Err(MoveError::CellOccupied(pos)),
            Some(square) => {
                *square = Square::Occupied(mark);
                Ok(())
            }
        }
    }

    /// Clears every square.
    pub fn clear(&mut self) {
        self.squares = [Square::Empty; BOARD_CELLS];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    /// A character other than `X`, `O`, `_` or `.` was found.
    #[display("Unexpected board character {:?}", found)]
    UnexpectedChar {
        /// The offending character.
        found: char,
    },
    /// The text did not describe exactly nine squares.
    #[display("Expected 9 squares, found {}", found)]
    WrongLength {
        /// Number of squares read.
        found: usize,
    },
}

/// Parses nine squares from text, ignoring whitespace.
///
/// `X` and `O` are marks, `_` and `.` are empty squares.
///
/// ```
/// use randtoe::{Board, Mark, Square};
///
/// let board: Board = "XX_ _O_ __O".parse().unwrap();
/// assert_eq!(board.get(0), Some(Square::Occupied(Mark::X)));
/// assert_eq!(board.empty_count(), 5);
/// ```
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squares = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c {
                'X' | 'x' => Ok(Square::Occupied(Mark::X)),
                'O' | 'o' => Ok(Square::Occupied(Mark::O)),
                '_' | '.' => Ok(Square::Empty),
                found => Err(ParseBoardError::UnexpectedChar { found }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let found = squares.len();
        let squares: [Square; BOARD_CELLS] = squares
            .try_into()
            .map_err(|_| ParseBoardError::WrongLength { found })?;
        Ok(Self::from_squares(squares))
    }
}
