use std::io;
use std::path::PathBuf;

/// Error for [`crate::run_puzzle`]
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    /// No puzzle is registered under this name
    #[error("puzzle `{0}` is not implemented")]
    UnknownPuzzle(String),
    /// A puzzle's input file could not be read
    #[error("failed to read input data `{path}`")]
    UnreadableInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
