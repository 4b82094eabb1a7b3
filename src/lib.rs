mod bitboard;
mod board;
mod common;
mod config;
mod game;
mod logging;
mod player;
mod player_ai;
mod player_cli;
mod ship;
pub mod ui;

pub use bitboard::{BitBoard, BitBoardError};
pub use board::Board;
pub use common::{BoardError, Coordinate, ShotResult};
pub use config::{BOARD_SIZE, FLEET, MAX_PLACEMENT_ATTEMPTS, NUM_SHIPS};
pub use game::{Game, MatchState};
pub use logging::init_logging;
pub use player::Player;
pub use player_ai::AiPlayer;
pub use player_cli::{parse_target, CliPlayer};
pub use ship::{Orientation, Ship};
