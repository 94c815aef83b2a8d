pub mod errors;
pub mod solutions;

pub use errors::PuzzleError;

/// Available puzzle names
pub const PUZZLES: &[&str] = &["name-scores", "pythagorean-triplet"];

/// Run a specific puzzle and return the answer
pub fn run_puzzle(name: &str) -> Result<String, PuzzleError> {
    match name {
        "name-scores" => solutions::name_scores::solve(),
        "pythagorean-triplet" => solutions::pythagorean_triplet::solve(),
        _ => Err(PuzzleError::UnknownPuzzle(name.to_string())),
    }
}
