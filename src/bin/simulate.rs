use anyhow::Result;
use clap::Parser;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use twenty48::engine::Direction;
use twenty48::evaluator::GameStatus;
use twenty48::session::{Session, Variant};

#[derive(Parser, Debug)]
#[clap(author, version, about = "Plays seeded random games for each variant", long_about = None)]
struct Args {
    /// Number of games per variant
    #[clap(short, long, default_value_t = 20)]
    games: u64,

    /// First seed; game `i` uses `start_seed + i`
    #[clap(short, long, default_value_t = 0)]
    start_seed: u64,

    /// Stop a game after this many inputs even if it is still going
    #[clap(short, long, default_value_t = 10_000)]
    max_inputs: u32,

    /// Only simulate this variant
    #[clap(short, long)]
    variant: Option<Variant>,
}

#[derive(Default)]
struct Summary {
    won: u32,
    lost: u32,
    unfinished: u32,
    best_scores: Vec<u32>,
    top_tiles: Vec<u32>,
    changing_moves: Vec<u32>,
}

fn mean(values: &[u32]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().map(|&v| v as f64).sum::<f64>() / values.len() as f64
}

/// Seed for game `game_idx`; wraps instead of overflowing near `u64::MAX`.
fn game_seed(start_seed: u64, game_idx: u64) -> u64 {
    start_seed.wrapping_add(game_idx)
}

fn simulate_variant(variant: Variant, args: &Args) -> Summary {
    let mut summary = Summary::default();

    for game_idx in 0..args.games {
        let seed = game_seed(args.start_seed, game_idx);
        // Inputs draw from their own generator; spawns stay on the session's.
        let mut session = Session::with_seed(variant, seed);
        let mut input_rng = SmallRng::seed_from_u64(seed.wrapping_add(0x2048));
        let mut changing = 0;

        for _ in 0..args.max_inputs {
            if session.is_over() {
                break;
            }
            let direction = *Direction::ALL
                .choose(&mut input_rng)
                .unwrap_or(&Direction::Left);
            if session.apply_move(direction).changed {
                changing += 1;
            }
        }

        match session.status() {
            GameStatus::Won => summary.won += 1,
            GameStatus::Lost => summary.lost += 1,
            GameStatus::Ongoing => {
                log::warn!(
                    "{} game with seed {} still running after {} inputs",
                    variant,
                    seed,
                    args.max_inputs
                );
                summary.unfinished += 1;
            }
        }
        log::debug!(
            "{} seed {}: {} after {} changing moves, best {}",
            variant,
            seed,
            session.status(),
            changing,
            session.best_score()
        );
        summary.best_scores.push(session.best_score());
        summary.top_tiles.push(session.grid().max_tile());
        summary.changing_moves.push(changing);
    }

    summary
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let variants: Vec<Variant> = match args.variant {
        Some(variant) => vec![variant],
        None => Variant::ALL.to_vec(),
    };

    println!(
        "Simulating {} random games per variant (seeds {}..{})...",
        args.games,
        args.start_seed,
        game_seed(args.start_seed, args.games)
    );

    println!("\n--- Results ---");
    for variant in variants {
        let summary = simulate_variant(variant, &args);
        println!(
            "Variant {:<12}: Won {:<4} Lost {:<4} Unfinished {:<4} Avg best {:>8.2}  Avg top tile {:>8.2}  Avg moves {:>8.2}",
            variant.to_string(),
            summary.won,
            summary.lost,
            summary.unfinished,
            mean(&summary.best_scores),
            mean(&summary.top_tiles),
            mean(&summary.changing_moves)
        );
    }

    Ok(())
}
