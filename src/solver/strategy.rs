//! Guess ranking strategies
//!
//! Defines the `RankingStrategy` trait and the enum used for runtime selection.

use super::{PositionFrequency, UsageFrequency};
use crate::core::Word;

/// A heuristic ordering of candidates, best guess first
///
/// Implementations must be deterministic: equal inputs give equal outputs
/// regardless of the order the candidates arrive in.
pub trait RankingStrategy {
    /// Short name used in reports
    fn name(&self) -> &'static str;

    /// Order `candidates` best guess first
    fn rank(&self, candidates: Vec<Word>) -> Vec<Word>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Sum of per-position letter frequencies
    PositionFrequency(PositionFrequency),
    /// Real-world word usage
    UsageFrequency(UsageFrequency),
}

impl RankingStrategy for StrategyType {
    fn name(&self) -> &'static str {
        match self {
            Self::PositionFrequency(s) => s.name(),
            Self::UsageFrequency(s) => s.name(),
        }
    }

    fn rank(&self, candidates: Vec<Word>) -> Vec<Word> {
        match self {
            Self::PositionFrequency(s) => s.rank(candidates),
            Self::UsageFrequency(s) => s.rank(candidates),
        }
    }
}

impl StrategyType {
    /// Names accepted by [`StrategyType::from_name`]
    pub const NAMES: [&'static str; 2] = ["position", "usage"];

    /// Create strategy from name string
    ///
    /// Supported names: "position" / "position-frequency" and
    /// "usage" / "usage-frequency". `usage_ranking` is only read by the usage
    /// strategy and lists words most common first.
    #[must_use]
    pub fn from_name(name: &str, usage_ranking: &[Word]) -> Option<Self> {
        match name {
            "position" | "position-frequency" => Some(Self::PositionFrequency(PositionFrequency)),
            "usage" | "usage-frequency" => {
                Some(Self::UsageFrequency(UsageFrequency::new(usage_ranking)))
            }
            _ => None,
        }
    }
}
