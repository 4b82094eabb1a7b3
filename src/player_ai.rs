use rand::rngs::SmallRng;
use rand::Rng;

use crate::common::Coordinate;
use crate::config::BOARD_SIZE;
use crate::player::Player;

/// Computer opponent: uniform random targeting with no shot memory.
///
/// Duplicate targets are rejected by the board and simply redrawn.
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for AiPlayer {
    fn select_target(&mut self, rng: &mut SmallRng) -> anyhow::Result<Coordinate> {
        let target = Coordinate::new(
            rng.random_range(0..BOARD_SIZE as i32),
            rng.random_range(0..BOARD_SIZE as i32),
        );
        println!("Computer fires at {}", target);
        Ok(target)
    }
}
