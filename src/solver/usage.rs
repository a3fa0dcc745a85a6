//! Usage-frequency ranking
//!
//! Prefers words that are common in real-world text over rare words that
//! merely match the letters well.

use super::RankingStrategy;
use crate::core::Word;
use rustc_hash::FxHashMap;

/// Rank given to words missing from the usage ordering
pub const UNRANKED: usize = usize::MAX;

/// Ranks candidates by external usage rank, most common first
#[derive(Debug, Clone, Default)]
pub struct UsageFrequency {
    ranks: FxHashMap<String, usize>,
}

impl UsageFrequency {
    /// Build from words ordered most common first
    ///
    /// The first word gets rank 1. Repeated words keep their best rank.
    #[must_use]
    pub fn new(most_common_first: &[Word]) -> Self {
        let mut ranks = FxHashMap::default();
        for (index, word) in most_common_first.iter().enumerate() {
            ranks.entry(word.text().to_string()).or_insert(index + 1);
        }
        Self { ranks }
    }

    /// Usage rank of `word`, or [`UNRANKED`] if it is not in the ordering
    #[must_use]
    pub fn rank_of(&self, word: &Word) -> usize {
        self.ranks.get(word.text()).copied().unwrap_or(UNRANKED)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

impl RankingStrategy for UsageFrequency {
    fn name(&self) -> &'static str {
        "usage-frequency"
    }

    fn rank(&self, mut candidates: Vec<Word>) -> Vec<Word> {
        candidates.sort_by_cached_key(|word| (self.rank_of(word), word.clone()));
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{texts, word, words};

    #[test]
    fn ranks_start_at_one() {
        let usage = UsageFrequency::new(&words(&["about", "other", "crate"]));

        assert_eq!(usage.rank_of(&word("about")), 1);
        assert_eq!(usage.rank_of(&word("crate")), 3);
        assert_eq!(usage.rank_of(&word("zesty")), UNRANKED);
        assert_eq!(usage.len(), 3);
    }

    #[test]
    fn repeated_words_keep_first_rank() {
        let usage = UsageFrequency::new(&words(&["crate", "about", "crate"]));
        assert_eq!(usage.rank_of(&word("crate")), 1);
        assert_eq!(usage.len(), 2);
    }

    #[test]
    fn rank_orders_by_usage() {
        let usage = UsageFrequency::new(&words(&["about", "other", "crate", "grate"]));
        let ranked = usage.rank(words(&["grate", "crate", "other"]));
        assert_eq!(texts(&ranked), ["other", "crate", "grate"]);
    }

    #[test]
    fn unranked_words_sort_last_in_lexicographic_order() {
        let usage = UsageFrequency::new(&words(&["grate"]));
        let ranked = usage.rank(words(&["irate", "crate", "grate", "caret"]));
        assert_eq!(texts(&ranked), ["grate", "caret", "crate", "irate"]);
    }

    #[test]
    fn empty_ordering_falls_back_to_lexicographic() {
        let usage = UsageFrequency::default();
        assert!(usage.is_empty());

        let ranked = usage.rank(words(&["trace", "crate", "react"]));
        assert_eq!(texts(&ranked), ["crate", "react", "trace"]);
    }
}
