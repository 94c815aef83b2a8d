use math::pythagorean_triplet;
use tracing::debug;

use crate::PuzzleError;

const TARGET_SUM: u64 = 1000;

/// Special Pythagorean Triplet: find a + b + c = 1000 with a² + b² = c²
/// and report the product abc.
pub fn solve() -> Result<String, PuzzleError> {
    Ok(match pythagorean_triplet(TARGET_SUM) {
        Some((a, b, c)) => {
            debug!(a, b, c, "found triplet");
            (a * b * c).to_string()
        }
        None => "no triplet exists".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve() {
        assert_eq!(solve().unwrap(), "31875000");
    }
}
