use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use seabattle::{init_logging, ui, AiPlayer, CliPlayer, Game};

/// Console sea battle against a random computer opponent.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Fix RNG seed for a reproducible game (e.g., --seed 12345)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    ui::greet();
    let mut game = Game::random(&mut rng, Box::new(CliPlayer::new()), Box::new(AiPlayer::new()));
    game.run(&mut rng)
}
