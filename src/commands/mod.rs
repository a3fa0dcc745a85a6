//! Command implementations

pub mod benchmark;
pub mod scores;
pub mod simulate;

pub use benchmark::{BenchmarkResult, run_benchmark, sample_answers};
pub use scores::{LetterScore, ScoreOrder, letter_frequencies, score_words};
pub use simulate::{SimulateConfig, simulate_each, simulate_word};
