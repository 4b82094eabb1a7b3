//! Board state: placement with the no-touch margin rule, shot resolution,
//! and random fleet generation.

use rand::Rng;

use crate::bitboard::BitBoard;
use crate::common::{BoardError, Coordinate, ShotResult};
use crate::config::{BOARD_SIZE, FLEET, MAX_PLACEMENT_ATTEMPTS};
use crate::ship::{Orientation, Ship};

type BB = BitBoard<u64, BOARD_SIZE>;

/// One side's fleet and everything that has happened to it.
///
/// `used` plays two roles in sequence: during placement it holds every ship
/// cell plus the surrounding margin, enforcing the rule that ships may not
/// touch (diagonals included); once the fleet is complete it is reset and
/// from then on tracks shots, plus the margins revealed around sunk ships.
pub struct Board {
    ships: Vec<Ship>,
    ship_map: BB,
    used: BB,
    hits: BB,
    misses: BB,
    sunk: usize,
}

impl Board {
    /// Create an empty board with no ships placed.
    pub fn new() -> Self {
        Board {
            ships: Vec::new(),
            ship_map: BB::new(),
            used: BB::new(),
            hits: BB::new(),
            misses: BB::new(),
            sunk: 0,
        }
    }

    /// True iff the coordinate lies on the board.
    pub fn in_bounds(c: Coordinate) -> bool {
        (0..BOARD_SIZE as i32).contains(&c.row) && (0..BOARD_SIZE as i32).contains(&c.col)
    }

    /// Ships placed on this board.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Occupancy of all ship cells.
    pub fn ship_map(&self) -> BB {
        self.ship_map
    }

    /// Cells excluded from further shots: shots taken plus reserved margins.
    pub fn used(&self) -> BB {
        self.used
    }

    /// Cells where a shot struck a ship.
    pub fn hits(&self) -> BB {
        self.hits
    }

    /// Cells where a shot struck water.
    pub fn misses(&self) -> BB {
        self.misses
    }

    /// Number of ships sunk so far.
    pub fn sunk_count(&self) -> usize {
        self.sunk
    }

    /// Place a ship, enforcing bounds and the no-touch rule.
    ///
    /// On success the ship's cells are marked occupied and its margin is
    /// reserved in `used` so later placements cannot touch it.
    pub fn place_ship(&mut self, ship: Ship) -> Result<(), BoardError> {
        let mut mask = BB::new();
        for cell in ship.cells() {
            if !Self::in_bounds(cell) {
                return Err(BoardError::InvalidPlacement);
            }
            if self.used.contains(cell.row as usize, cell.col as usize) {
                return Err(BoardError::InvalidPlacement);
            }
            mask.set(cell.row as usize, cell.col as usize)?;
        }
        self.ship_map |= mask;
        self.used |= mask;
        self.reserve_margin(&ship);
        self.ships.push(ship);
        Ok(())
    }

    /// Add every in-bounds cell of the ship's 8-neighborhood to `used`.
    ///
    /// During placement this reserves the no-touch margin; after a sink the
    /// same reservation is what reveals the margin around the wreck.
    fn reserve_margin(&mut self, ship: &Ship) {
        for cell in ship.cells() {
            for near in cell.neighborhood() {
                if Self::in_bounds(near) {
                    let _ = self.used.set(near.row as usize, near.col as usize);
                }
            }
        }
    }

    /// Clear the used-set once the fleet is fully placed, so shot tracking
    /// is not blocked by placement-time margin reservations.
    pub fn reset_used(&mut self) {
        self.used.clear_all();
    }

    /// Resolve a shot at `target`.
    pub fn fire(&mut self, target: Coordinate) -> Result<ShotResult, BoardError> {
        if !Self::in_bounds(target) {
            return Err(BoardError::OutOfBounds);
        }
        let (row, col) = (target.row as usize, target.col as usize);
        if self.used.contains(row, col) {
            return Err(BoardError::AlreadyShot);
        }
        self.used.set(row, col)?;

        if let Some(idx) = self.ships.iter().position(|s| s.covers(target)) {
            self.hits.set(row, col)?;
            self.ships[idx].record_hit();
            if self.ships[idx].is_sunk() {
                self.sunk += 1;
                let wreck = self.ships[idx];
                self.reserve_margin(&wreck);
                return Ok(ShotResult::Sunk);
            }
            return Ok(ShotResult::Hit);
        }

        self.misses.set(row, col)?;
        Ok(ShotResult::Miss)
    }

    /// Generate a board with the full fleet placed at random.
    ///
    /// Retries whole boards until one fills in; a single board gives up
    /// after [`MAX_PLACEMENT_ATTEMPTS`] placement attempts.
    pub fn random<R: Rng>(rng: &mut R) -> Board {
        loop {
            match Self::try_fill(rng) {
                Some(board) => return board,
                None => log::debug!("fleet placement ran out of attempts, regenerating board"),
            }
        }
    }

    /// Attempt to place the whole fleet on a fresh board.
    fn try_fill<R: Rng>(rng: &mut R) -> Option<Board> {
        let mut board = Board::new();
        let mut attempts: u32 = 0;
        for &length in FLEET.iter() {
            loop {
                attempts += 1;
                if attempts > MAX_PLACEMENT_ATTEMPTS {
                    return None;
                }
                // The bow draw is inclusive of the far edge, so some draws
                // land outside the board; place_ship filters them.
                let bow = Coordinate::new(
                    rng.random_range(0..=BOARD_SIZE as i32),
                    rng.random_range(0..=BOARD_SIZE as i32),
                );
                let orientation = if rng.random() {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                };
                if board.place_ship(Ship::new(length, bow, orientation)).is_ok() {
                    break;
                }
            }
        }
        board.reset_used();
        Some(board)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
