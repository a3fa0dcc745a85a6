//! Position-frequency ranking
//!
//! For every (position, letter) pair, the fraction of candidates holding that
//! letter at that position. A word scores the sum of the fractions of its own
//! letters, so words whose letters are likely to land green rank first.

use super::RankingStrategy;
use crate::core::Word;

/// Ranks candidates by summed per-position letter frequency
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionFrequency;

/// Letter counts per position over a candidate set
struct PositionCounts {
    counts: Vec<[u32; 128]>,
    total: usize,
}

impl PositionCounts {
    fn new(candidates: &[Word]) -> Self {
        let length = candidates.first().map_or(0, |w| w.letters().len());
        let mut counts = vec![[0u32; 128]; length];

        for word in candidates {
            for (column, &letter) in counts.iter_mut().zip(word.letters()) {
                if let Some(count) = column.get_mut(usize::from(letter)) {
                    *count += 1;
                }
            }
        }

        Self {
            counts,
            total: candidates.len(),
        }
    }

    /// Sum of raw counts; proportional to the fractional score
    fn raw_score(&self, word: &Word) -> u64 {
        self.counts
            .iter()
            .zip(word.letters())
            .map(|(column, &letter)| {
                column
                    .get(usize::from(letter))
                    .map_or(0, |&count| u64::from(count))
            })
            .sum()
    }

    fn score(&self, word: &Word) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.raw_score(word) as f64 / self.total as f64
    }
}

impl PositionFrequency {
    /// Score each candidate against the set it belongs to
    ///
    /// Returned in candidate order. A score is the sum, over the word's
    /// positions, of the fraction of candidates sharing its letter there.
    #[must_use]
    pub fn scores<'a>(&self, candidates: &'a [Word]) -> Vec<(&'a Word, f64)> {
        let table = PositionCounts::new(candidates);
        candidates
            .iter()
            .map(|word| (word, table.score(word)))
            .collect()
    }
}

impl RankingStrategy for PositionFrequency {
    fn name(&self) -> &'static str {
        "position-frequency"
    }

    fn rank(&self, candidates: Vec<Word>) -> Vec<Word> {
        let table = PositionCounts::new(&candidates);

        // Integer sums order the same as fractions over a shared denominator
        let mut scored: Vec<(u64, Word)> = candidates
            .into_iter()
            .map(|word| (table.raw_score(&word), word))
            .collect();
        scored.sort_by(|(score_a, word_a), (score_b, word_b)| {
            score_b.cmp(score_a).then_with(|| word_a.cmp(word_b))
        });

        scored.into_iter().map(|(_, word)| word).collect()
    }
}
