//! Shared types: coordinates, shot outcomes and board errors.

use std::fmt;

use crate::bitboard::BitBoardError;

/// A cell on (or off) the board, identified by row and column.
///
/// Signed so that values produced from user input or random over-generation
/// can lie outside the board; the board's bounds check rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    pub const fn new(row: i32, col: i32) -> Self {
        Coordinate { row, col }
    }

    /// The nine cells at relative offsets {-1,0,1}×{-1,0,1}, self included.
    /// Offsets are not clipped to the board.
    pub fn neighborhood(self) -> impl Iterator<Item = Coordinate> {
        const NEAR: [(i32, i32); 9] = [
            (-1, -1),
            (-1, 0),
            (-1, 1),
            (0, -1),
            (0, 0),
            (0, 1),
            (1, -1),
            (1, 0),
            (1, 1),
        ];
        NEAR.into_iter()
            .map(move |(dr, dc)| Coordinate::new(self.row + dr, self.col + dc))
    }
}

/// Prints the 1-indexed `row col` form used in console messages.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row + 1, self.col + 1)
    }
}

/// Outcome of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResult {
    /// Shot missed every ship.
    Miss,
    /// Shot hit a ship that is still afloat.
    Hit,
    /// Shot sank a ship.
    Sunk,
}

impl ShotResult {
    /// Only a plain hit grants the same side another shot.
    pub fn repeats_turn(self) -> bool {
        matches!(self, ShotResult::Hit)
    }
}

/// Errors returned by board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Target coordinate lies outside the board.
    OutOfBounds,
    /// Target coordinate was already fired at (or is a revealed margin).
    AlreadyShot,
    /// Ship placement collides with the bounds or another ship's margin.
    InvalidPlacement,
    /// Underlying bitboard error (invalid index).
    Cell(BitBoardError),
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::Cell(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds => write!(f, "Shot is off the board!"),
            BoardError::AlreadyShot => write!(f, "You already fired at that square!"),
            BoardError::InvalidPlacement => write!(f, "ship placement is invalid"),
            BoardError::Cell(e) => write!(f, "cell error: {}", e),
        }
    }
}
