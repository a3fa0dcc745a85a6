//! Simulation loop
//!
//! Guess, mark, constrain, filter, rank, repeat until the answer is guessed.

use super::constraints::Constraints;
use super::error::SolverError;
use super::strategy::RankingStrategy;
use crate::core::{Mark, Word};
use log::{debug, info};

/// Number of ranked candidates kept per step for display
pub const DEFAULT_PREVIEW_LEN: usize = 15;

/// Limits for a simulation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Guess limit; `None` means one more than the word list size
    pub max_iterations: Option<usize>,
    /// How many ranked candidates each step keeps for display
    pub preview_len: usize,
}

impl SimulationConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_iterations: None,
            preview_len: DEFAULT_PREVIEW_LEN,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A single guess of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessStep {
    /// 1-based guess number
    pub number: usize,
    pub guess: Word,
    pub mark: Mark,
    /// Candidates left after this guess's constraints were applied
    pub remaining: usize,
    /// Best-ranked remaining candidates, next guess first
    pub preview: Vec<Word>,
}

/// Outcome of a solved run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationReport {
    pub answer: Word,
    pub strategy: &'static str,
    pub steps: Vec<GuessStep>,
}

impl SimulationReport {
    /// Number of guesses taken, including the final correct one
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.steps.len()
    }

    /// The guess history as (guess, mark) pairs
    pub fn history(&self) -> impl Iterator<Item = (&Word, &Mark)> {
        self.steps.iter().map(|step| (&step.guess, &step.mark))
    }
}

/// Runs the guess loop for one strategy over a fixed word list
///
/// The word list is the initial candidate set and is never modified.
pub struct Simulation<'a, S: RankingStrategy> {
    strategy: S,
    words: &'a [Word],
    config: SimulationConfig,
}

impl<'a, S: RankingStrategy> Simulation<'a, S> {
    /// Create a new simulation with the given strategy and word list
    pub const fn new(strategy: S, words: &'a [Word]) -> Self {
        Self {
            strategy,
            words,
            config: SimulationConfig::new(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    pub const fn words(&self) -> &'a [Word] {
        self.words
    }

    /// Guess limit for a run
    #[must_use]
    pub fn max_iterations(&self) -> usize {
        self.config
            .max_iterations
            .unwrap_or_else(|| self.words.len() + 1)
    }

    /// Top-ranked word of the full word list
    pub fn first_guess(&self) -> Option<Word> {
        self.strategy.rank(self.words.to_vec()).into_iter().next()
    }

    /// Play until `answer` is guessed
    ///
    /// Starts from `initial_guess`, or from [`Simulation::first_guess`] when
    /// none is given. The initial guess need not be in the word list; every
    /// later guess is the top-ranked remaining candidate.
    ///
    /// # Errors
    /// - `SolverError::InvalidInput` if a guess and the answer differ in length
    /// - `SolverError::NoCandidates` if filtering empties the candidate set,
    ///   or the word list is empty and no initial guess was given
    /// - `SolverError::MaxIterationsExceeded` if the guess limit is reached
    pub fn run(
        &self,
        answer: &Word,
        initial_guess: Option<Word>,
    ) -> Result<SimulationReport, SolverError> {
        let opener = initial_guess.or_else(|| self.first_guess());
        let Some(mut guess) = opener else {
            return Err(SolverError::NoCandidates { guesses: 0 });
        };

        let max_iterations = self.max_iterations();
        let mut candidates = self.words.to_vec();
        let mut constraints = Constraints::unconstrained(answer.letters().len());
        let mut steps = Vec::new();

        for number in 1..=max_iterations {
            let mark = Mark::calculate(&guess, answer)?;

            if mark.is_solved() {
                info!(
                    "{}: solved {answer} in {number} guess(es)",
                    self.strategy.name()
                );
                steps.push(GuessStep {
                    number,
                    guess: guess.clone(),
                    mark,
                    remaining: 1,
                    preview: vec![guess],
                });
                return Ok(SimulationReport {
                    answer: answer.clone(),
                    strategy: self.strategy.name(),
                    steps,
                });
            }

            constraints.merge(&Constraints::from_guess(&guess, &mark)?);
            candidates = self.strategy.rank(constraints.filter(candidates));
            debug!(
                "guess {number}: {guess} {mark} leaves {} candidate(s)",
                candidates.len()
            );

            let Some(next) = candidates.first().cloned() else {
                return Err(SolverError::NoCandidates { guesses: number });
            };

            steps.push(GuessStep {
                number,
                guess,
                mark,
                remaining: candidates.len(),
                preview: candidates
                    .iter()
                    .take(self.config.preview_len)
                    .cloned()
                    .collect(),
            });
            guess = next;
        }

        Err(SolverError::MaxIterationsExceeded(max_iterations))
    }
}
