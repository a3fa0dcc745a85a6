//! Candidate filtering

use super::constraints::{CharCountConstraint, Constraints, PositionConstraint};
use crate::core::Word;

/// Keep the words that satisfy both constraint maps
///
/// Pure and order-preserving. Filtering twice with the same constraints gives
/// the same result as filtering once, and the output is never larger than the
/// input.
#[must_use]
pub fn filter(
    words: &[Word],
    counts: &CharCountConstraint,
    positions: &PositionConstraint,
) -> Vec<Word> {
    words
        .iter()
        .filter(|word| counts.allows(word) && positions.allows(word))
        .cloned()
        .collect()
}

impl Constraints {
    /// Consume a candidate set and keep the words these constraints allow
    #[must_use]
    pub fn filter(&self, mut candidates: Vec<Word>) -> Vec<Word> {
        candidates.retain(|word| self.allows(word));
        candidates
    }
}
