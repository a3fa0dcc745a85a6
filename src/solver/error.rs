//! Failures surfaced by a simulation run

use crate::core::WordError;
use thiserror::Error;

/// Why a simulation stopped without solving the puzzle
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// A guess or answer does not fit the game configuration
    #[error("invalid input: {0}")]
    InvalidInput(#[from] WordError),

    /// Filtering left nothing to guess. Either the constraint logic is wrong
    /// or the answer is missing from the word list.
    #[error("no candidate words remain after {guesses} guess(es)")]
    NoCandidates { guesses: usize },

    /// The iteration guard tripped before the answer was found
    #[error("answer not found within {0} guesses")]
    MaxIterationsExceeded(usize),
}
