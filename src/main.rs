#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::{Rng, SeedableRng};
#[cfg(feature = "std")]
use serde_json::json;
#[cfg(feature = "std")]
use twenty48::{init_logging, Direction, Game4};

/// Headless playout harness: plays games with random moves until game over
/// and prints a JSON summary.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Number of games to play.
    #[arg(long, default_value_t = 1)]
    games: u64,
    /// Fix RNG seed for reproducible playouts (e.g., --seed 12345).
    #[arg(long)]
    seed: Option<u64>,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_rng(&mut rand::rng()),
    };

    let mut best_score = 0u32;
    let mut best_tile = 0u32;
    let mut total_moves = 0u64;

    for game in 0..cli.games {
        let mut engine = Game4::with_rng(&mut rng);
        let mut moves = 0u64;
        while !engine.is_game_over() {
            let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
            if !engine.apply_move(direction, &mut rng).is_rejected() {
                moves += 1;
            }
        }
        let score = engine.score();
        let highest = engine.grid().highest_tile();
        log::info!(
            "game {}: score {}, highest tile {}, {} moves",
            game,
            score,
            highest,
            moves
        );
        best_score = best_score.max(score);
        best_tile = best_tile.max(highest);
        total_moves += moves;
    }

    let result = json!({
        "games": cli.games,
        "best_score": best_score,
        "best_tile": best_tile,
        "total_moves": total_moves,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
