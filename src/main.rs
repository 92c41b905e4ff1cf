use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{init_logging, ui, AiPlayer, CliPlayer, Game, Player, DEFAULT_BOARD_SIZE};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board edge length.
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    size: i32,
    /// Fix RNG seed for reproducible games (e.g., --seed 12345).
    #[arg(long)]
    seed: Option<u64>,
    /// Watch two automated players battle each other.
    #[arg(long)]
    auto: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    if cli.size < 3 {
        anyhow::bail!("board size {} cannot fit the three-decker", cli.size);
    }
    let rng = if let Some(s) = cli.seed {
        println!("Using fixed seed: {s} (game will be reproducible)");
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let (players, concealed): ([Box<dyn Player>; 2], [bool; 2]) = if cli.auto {
        (
            [
                Box::new(AiPlayer::named("Computer 1")),
                Box::new(AiPlayer::named("Computer 2")),
            ],
            [false, false],
        )
    } else {
        ([Box::new(CliPlayer::new()), Box::new(AiPlayer::new())], [false, true])
    };

    ui::greet();
    let mut game =
        Game::new(cli.size, players, concealed, rng).map_err(|e| anyhow::anyhow!(e))?;
    game.run();
    Ok(())
}
