use anyhow::Result;
use clap::Parser;
use puzzles::{run_puzzle, PuzzleError, PUZZLES};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "puzzles")]
#[command(about = "Run puzzle solutions")]
struct Cli {
    /// Run a specific puzzle by name
    #[arg(short, long)]
    puzzle: Option<String>,

    /// Run all available puzzles
    #[arg(short, long)]
    all: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    if cli.all {
        for &name in PUZZLES {
            let answer = run_puzzle(name)?;
            println!("{}: {}", name, answer);
        }
    } else if let Some(name) = cli.puzzle {
        match run_puzzle(&name) {
            // A lone puzzle prints the bare answer
            Ok(answer) => println!("{}", answer),
            Err(PuzzleError::UnknownPuzzle(_)) => {
                eprintln!("Puzzle {} not implemented", name);
                eprintln!("Available puzzles: {:?}", PUZZLES);
            }
            Err(err) => return Err(err.into()),
        }
    } else {
        eprintln!("Usage: puzzles --puzzle <NAME> or --all");
        eprintln!("Available puzzles: {:?}", PUZZLES);
    }

    Ok(())
}
