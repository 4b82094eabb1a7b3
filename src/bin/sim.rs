//! Headless computer-vs-computer match, for smoke testing and eyeballing
//! game balance. Prints the full shot transcript followed by a summary line.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use seabattle::{AiPlayer, Game, MatchState};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <placement-seed> <shot-seed>", args[0]);
        std::process::exit(1);
    }
    let placement_seed: u64 = args[1].parse()?;
    let shot_seed: u64 = args[2].parse()?;

    let mut placement_rng = SmallRng::seed_from_u64(placement_seed);
    let mut shot_rng = SmallRng::seed_from_u64(shot_seed);

    let mut game = Game::random(
        &mut placement_rng,
        Box::new(AiPlayer::new()),
        Box::new(AiPlayer::new()),
    );

    let mut turns = 0u32;
    while !game.state().is_terminal() {
        game.advance(&mut shot_rng)?;
        turns += 1;
    }

    let winner = if game.state() == MatchState::PlayerWon {
        "first"
    } else {
        "second"
    };
    println!("winner={} turns={}", winner, turns);
    Ok(())
}
