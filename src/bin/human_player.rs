use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use twenty48::evaluator::GameStatus;
use twenty48::grid::{Grid, GRID_SIZE};
use twenty48::session::{Session, Snapshot, Variant};
use twenty48::utils::{grid_from_str_array, parse_direction};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Rule variant (normal, hard, easy, competition). Prompts when omitted.
    #[clap(short, long)]
    variant: Option<Variant>,

    /// Seed for tile spawns, for a reproducible game
    #[clap(short, long)]
    seed: Option<u64>,

    /// Start the first game from a saved position (4 rows of values, `.` for empty)
    #[clap(short, long)]
    board: Option<PathBuf>,
}

fn read_board_file(path: &Path) -> Result<Grid> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read board file {}", path.display()))?;
    let lines: Vec<&str> = content
        .lines()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    grid_from_str_array(&lines).with_context(|| format!("Invalid board in {}", path.display()))
}

/// Prints `message` and reads one trimmed line. `None` on end of input.
fn prompt(message: &str) -> Result<Option<String>> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

fn select_mode() -> Result<Option<Variant>> {
    println!("Choose a game mode:");
    for (i, variant) in Variant::ALL.iter().enumerate() {
        println!("  {}) {}", i + 1, variant);
    }
    loop {
        let Some(choice) = prompt("Mode (number or name), 'q' to quit: ")? else {
            return Ok(None);
        };
        if choice == "q" {
            return Ok(None);
        }
        if let Ok(n) = choice.parse::<usize>() {
            if let Some(variant) = n.checked_sub(1).and_then(|i| Variant::ALL.get(i)) {
                return Ok(Some(*variant));
            }
        }
        match choice.parse::<Variant>() {
            Ok(variant) => return Ok(Some(variant)),
            Err(e) => println!("{}", e),
        }
    }
}

/// Background color for a tile, as an RGB triple.
fn tile_color(value: u32) -> (u8, u8, u8) {
    match value {
        2 => (0xfd, 0xd0, 0xdc),
        4 => (0xfc, 0xb3, 0xc2),
        8 => (0xf8, 0xa2, 0xb7),
        16 => (0xf7, 0x81, 0x9f),
        32 => (0xf7, 0x6c, 0x7c),
        64 => (0xf6, 0x4d, 0x65),
        128 => (0xf6, 0x4d, 0x6f),
        256 => (0xf6, 0x5f, 0x6f),
        512 => (0xf6, 0x72, 0x72),
        1024 => (0xf6, 0x7d, 0x7d),
        2048 => (0xf6, 0x88, 0x88),
        0 => (0xcd, 0xc1, 0xb4),
        _ => (0xfa, 0xf8, 0xef),
    }
}

fn render(snapshot: &Snapshot) -> String {
    let mut output = String::new();
    for r in 0..GRID_SIZE {
        for c in 0..GRID_SIZE {
            let value = snapshot.values[r][c];
            let (red, green, blue) = tile_color(value);
            let text = if value == 0 {
                String::new()
            } else {
                value.to_string()
            };
            output.push_str(&format!(
                "\x1b[1;30;48;2;{};{};{}m{:^6}\x1b[m",
                red, green, blue, text
            ));
        }
        output.push('\n');
    }
    output.push_str(&format!("Best Score: {}", snapshot.best_score));
    if let Some(moves) = snapshot.move_count {
        output.push_str(&format!("   Moves: {}", moves));
    }
    output
}

fn play(session: &mut Session) -> Result<()> {
    loop {
        let snapshot = session.snapshot();
        println!("---------------------");
        println!("{}", render(&snapshot));

        if snapshot.status.is_terminal() {
            let message = match snapshot.status {
                GameStatus::Won => "🎉 Congratulations, you reached 2048! 🎉",
                _ => "GAME OVER! No moves left.",
            };
            println!("{}", message);
            println!("Largest tile: {}", session.grid().max_tile());
            match prompt("Play again? (y/n): ")? {
                Some(answer) if answer.eq_ignore_ascii_case("y") => {
                    session.reset();
                    continue;
                }
                _ => {
                    println!("Thanks for playing!");
                    return Ok(());
                }
            }
        }

        let Some(input) = prompt("Move with w/a/s/d (or h/j/k/l), 'q' to quit: ")? else {
            return Ok(());
        };
        if input == "q" {
            println!("Thanks for playing!");
            return Ok(());
        }
        match parse_direction(&input) {
            Ok(direction) => {
                if !session.apply_move(direction).changed {
                    println!("Nothing moved.");
                }
            }
            Err(e) => println!("{}", e),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("Welcome to 2048!");
    let variant = match args.variant {
        Some(variant) => variant,
        None => match select_mode()? {
            Some(variant) => variant,
            None => return Ok(()),
        },
    };

    let rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    let mut session = match &args.board {
        Some(path) => Session::from_grid(variant, read_board_file(path)?, rng),
        None => Session::with_rng(variant, rng),
    };
    println!(
        "Playing {} mode, new tiles are {}.",
        session.variant(),
        session.config().spawn_value
    );

    play(&mut session)
}
