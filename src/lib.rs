//! Wordle Simulator
//!
//! Plays Wordle against a known answer: guess, mark, narrow the candidate set
//! with the constraints the mark implies, rank what is left and guess again.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_sim::core::{GameConfig, Mark, Word};
//! use wordle_sim::solver::{PositionFrequency, Simulation};
//! use wordle_sim::wordlists::{WordListProvider, WordLists};
//!
//! let config = GameConfig::default();
//! let words = WordLists::embedded().words(&config);
//!
//! let guess = Word::new("arose", &config).unwrap();
//! let answer = Word::new("crate", &config).unwrap();
//! assert_eq!(Mark::calculate(&guess, &answer).unwrap().to_string(), "YG--G");
//!
//! let simulation = Simulation::new(PositionFrequency, &words);
//! let report = simulation.run(&answer, Some(guess)).unwrap();
//! assert_eq!(report.steps.last().unwrap().guess, answer);
//! ```

// Core domain types
pub mod core;

// Constraints, ranking and the simulation loop
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

#[cfg(test)]
mod test_utils;
