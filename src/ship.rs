//! Ship geometry and damage tracking.

use crate::common::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Extends along a row (columns increase from the bow).
    Horizontal,
    /// Extends along a column (rows increase from the bow).
    Vertical,
}

/// A ship anchored at its bow, extending `length` cells in `orientation`.
///
/// Remaining lives start at the length and only ever go down, one per
/// confirmed hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    length: usize,
    bow: Coordinate,
    orientation: Orientation,
    lives: usize,
}

impl Ship {
    pub fn new(length: usize, bow: Coordinate, orientation: Orientation) -> Self {
        Ship {
            length,
            bow,
            orientation,
            lives: length,
        }
    }

    /// The occupied cells: a straight line of `length` cells from the bow.
    ///
    /// Purely derived from the ship's fields; the line may extend past the
    /// board edge, in which case placement fails at the board.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let bow = self.bow;
        let orientation = self.orientation;
        (0..self.length as i32).map(move |i| match orientation {
            Orientation::Horizontal => Coordinate::new(bow.row, bow.col + i),
            Orientation::Vertical => Coordinate::new(bow.row + i, bow.col),
        })
    }

    /// True iff `target` is one of the ship's occupied cells.
    pub fn covers(&self, target: Coordinate) -> bool {
        self.cells().any(|c| c == target)
    }

    /// Register a confirmed hit on this ship.
    pub fn record_hit(&mut self) {
        self.lives = self.lives.saturating_sub(1);
    }

    pub fn is_sunk(&self) -> bool {
        self.lives == 0
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn lives(&self) -> usize {
        self.lives
    }
}
