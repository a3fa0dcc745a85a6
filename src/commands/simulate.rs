//! Simulation command
//!
//! Plays a single puzzle for a given answer and returns the solution path.

use crate::core::{GameConfig, Word};
use crate::solver::{RankingStrategy, Simulation, SimulationReport, SolverError};
use log::warn;

/// Configuration for simulating one puzzle
pub struct SimulateConfig {
    pub answer: String,
    pub initial_guess: Option<String>,
}

impl SimulateConfig {
    #[must_use]
    pub const fn new(answer: String) -> Self {
        Self {
            answer,
            initial_guess: None,
        }
    }

    #[must_use]
    pub fn with_initial_guess(mut self, guess: Option<String>) -> Self {
        self.initial_guess = guess;
        self
    }
}

/// Simulate solving `config.answer` with the given simulation
///
/// # Errors
///
/// Returns an error if:
/// - The answer or initial guess does not fit `game` (`SolverError::InvalidInput`)
/// - The run empties the candidate set or hits its guess limit
pub fn simulate_word<S: RankingStrategy>(
    config: &SimulateConfig,
    game: &GameConfig,
    simulation: &Simulation<S>,
) -> Result<SimulationReport, SolverError> {
    let answer = Word::new(config.answer.as_str(), game)?;
    let initial_guess = config
        .initial_guess
        .as_deref()
        .map(|guess| Word::new(guess, game))
        .transpose()?;

    if !simulation.words().contains(&answer) {
        warn!("answer '{answer}' is not in the word list; the run cannot find it");
    }
    if let Some(guess) = &initial_guess
        && !simulation.words().contains(guess)
    {
        warn!("initial guess '{guess}' is not in the word list");
    }

    simulation.run(&answer, initial_guess)
}

/// Simulate `config.answer` under each simulation in turn
///
/// A failed run does not stop the rest; every outcome is returned in order.
pub fn simulate_each<S: RankingStrategy>(
    config: &SimulateConfig,
    game: &GameConfig,
    simulations: &[Simulation<S>],
) -> Vec<Result<SimulationReport, SolverError>> {
    simulations
        .iter()
        .map(|simulation| simulate_word(config, game, simulation))
        .collect()
}
