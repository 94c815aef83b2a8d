use std::fs;
use std::path::PathBuf;

use math::alphabetical_value;
use tracing::debug;

use crate::PuzzleError;

/// Names Scores: read a list of quoted, comma-separated names, sort them,
/// and sum each name's alphabetical value multiplied by its 1-based rank.
pub fn solve() -> Result<String, PuzzleError> {
    let data_path: PathBuf = [env!("CARGO_MANIFEST_DIR"), "data", "names.txt"]
        .iter()
        .collect();
    let content = fs::read_to_string(&data_path).map_err(|source| {
        PuzzleError::UnreadableInput {
            path: data_path,
            source,
        }
    })?;

    Ok(total_score(&content).to_string())
}

/// Strips every `"`, splits on `,`, sorts, and sums rank-weighted scores.
///
/// Empty fields score 0; characters outside A-Z are not filtered.
fn total_score(content: &str) -> u64 {
    let stripped = content.replace('"', "");
    let mut names: Vec<&str> = stripped.split(',').collect();
    names.sort();

    debug!(count = names.len(), "scoring sorted names");

    names
        .iter()
        .enumerate()
        .map(|(i, name)| (i as u64 + 1) * alphabetical_value(name))
        .sum()
}
