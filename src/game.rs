//! Match orchestration: the alternating-turn state machine.

use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{BoardError, ShotResult};
use crate::config::NUM_SHIPS;
use crate::player::Player;
use crate::ui;

/// State of a match. A side keeps its turn after a plain hit; sinking a
/// ship or missing passes the turn over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    PlayerTurn,
    ComputerTurn,
    PlayerWon,
    ComputerWon,
}

impl MatchState {
    pub fn is_terminal(self) -> bool {
        matches!(self, MatchState::PlayerWon | MatchState::ComputerWon)
    }
}

/// A match between the interactive player and the computer: both boards,
/// both targeting strategies, and whose turn it is.
pub struct Game {
    player_board: Board,
    computer_board: Board,
    player: Box<dyn Player>,
    computer: Box<dyn Player>,
    state: MatchState,
}

impl Game {
    /// Pair two prepared boards with their targeting strategies. The
    /// interactive player moves first.
    pub fn new(
        player_board: Board,
        computer_board: Board,
        player: Box<dyn Player>,
        computer: Box<dyn Player>,
    ) -> Self {
        Game {
            player_board,
            computer_board,
            player,
            computer,
            state: MatchState::PlayerTurn,
        }
    }

    /// Generate both fleets at random and pair the given strategies.
    pub fn random(rng: &mut SmallRng, player: Box<dyn Player>, computer: Box<dyn Player>) -> Self {
        let player_board = Board::random(rng);
        let computer_board = Board::random(rng);
        Game::new(player_board, computer_board, player, computer)
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    pub fn computer_board(&self) -> &Board {
        &self.computer_board
    }

    /// Resolve one turn for the side to move, then update the state:
    /// win check first (player's win takes precedence), otherwise the
    /// turn passes unless the shot was a plain hit. No-op once terminal.
    pub fn advance(&mut self, rng: &mut SmallRng) -> anyhow::Result<()> {
        let repeat = match self.state {
            MatchState::PlayerTurn => {
                Self::take_turn(self.player.as_mut(), &mut self.computer_board, rng)?
            }
            MatchState::ComputerTurn => {
                Self::take_turn(self.computer.as_mut(), &mut self.player_board, rng)?
            }
            _ => return Ok(()),
        };

        if self.computer_board.sunk_count() == NUM_SHIPS {
            self.state = MatchState::PlayerWon;
        } else if self.player_board.sunk_count() == NUM_SHIPS {
            self.state = MatchState::ComputerWon;
        } else if !repeat {
            self.state = match self.state {
                MatchState::PlayerTurn => MatchState::ComputerTurn,
                MatchState::ComputerTurn => MatchState::PlayerTurn,
                terminal => terminal,
            };
        }
        Ok(())
    }

    /// One resolved shot. Rejected targets (off the board, already fired
    /// at) are reported and re-asked without consuming the turn.
    fn take_turn(
        player: &mut dyn Player,
        enemy: &mut Board,
        rng: &mut SmallRng,
    ) -> anyhow::Result<bool> {
        loop {
            let target = player.select_target(rng)?;
            match enemy.fire(target) {
                Ok(result) => {
                    log::trace!("shot at {} resolved as {:?}", target, result);
                    match result {
                        ShotResult::Hit => println!("Hit! Fire again."),
                        ShotResult::Sunk => println!("Ship destroyed!"),
                        ShotResult::Miss => println!("Miss!"),
                    }
                    return Ok(result.repeats_turn());
                }
                Err(err @ (BoardError::OutOfBounds | BoardError::AlreadyShot)) => {
                    println!("{}", err);
                }
                Err(err) => return Err(anyhow::anyhow!(err)),
            }
        }
    }

    /// Run the match on the console to completion.
    pub fn run(&mut self, rng: &mut SmallRng) -> anyhow::Result<()> {
        loop {
            ui::show_boards(&self.player_board, &self.computer_board);
            match self.state {
                MatchState::PlayerTurn => println!("Your turn!"),
                MatchState::ComputerTurn => println!("Computer's turn!"),
                _ => {}
            }
            self.advance(rng)?;
            if self.state.is_terminal() {
                ui::show_boards(&self.player_board, &self.computer_board);
                if self.state == MatchState::PlayerWon {
                    println!("You win!");
                } else {
                    println!("The computer wins!");
                }
                log::info!("match over: {:?}", self.state);
                return Ok(());
            }
        }
    }
}
