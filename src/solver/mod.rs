//! Candidate narrowing and guess selection
//!
//! Constraint derivation, filtering, ranking strategies and the simulation
//! loop that ties them together.

pub mod constraints;
mod engine;
mod error;
pub mod filter;
pub mod position;
pub mod strategy;
pub mod usage;

pub use constraints::{CharCountConstraint, Constraints, CountSet, PositionConstraint, derive};
pub use engine::{DEFAULT_PREVIEW_LEN, GuessStep, Simulation, SimulationConfig, SimulationReport};
pub use error::SolverError;
pub use filter::filter;
pub use position::PositionFrequency;
pub use strategy::{RankingStrategy, StrategyType};
pub use usage::{UNRANKED, UsageFrequency};
