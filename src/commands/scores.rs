//! Letter score command
//!
//! Scores words by how common their letters are across the whole word list,
//! restricted to words with a given number of distinct letters.

use crate::core::Word;
use rustc_hash::FxHashMap;

/// Which end of the score ordering to report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreOrder {
    Largest,
    Smallest,
}

/// A word and its letter score
#[derive(Debug, Clone, PartialEq)]
pub struct LetterScore {
    pub word: String,
    pub score: f64,
}

/// Share of all letters (counted with repeats) taken by each letter
#[must_use]
pub fn letter_frequencies(words: &[Word]) -> FxHashMap<u8, f64> {
    let mut counts: FxHashMap<u8, usize> = FxHashMap::default();
    let mut total = 0usize;
    for word in words {
        for &letter in word.letters() {
            *counts.entry(letter).or_insert(0) += 1;
            total += 1;
        }
    }

    counts
        .into_iter()
        .map(|(letter, count)| (letter, count as f64 / total as f64))
        .collect()
}

/// Score the words having exactly `distinct` different letters
///
/// A word's score is the sum of the frequencies of its letters, repeats
/// included. Returns at most `limit` entries from the requested end; equal
/// scores are ordered alphabetically.
#[must_use]
pub fn score_words(
    words: &[Word],
    distinct: usize,
    limit: usize,
    order: ScoreOrder,
) -> Vec<LetterScore> {
    let frequencies = letter_frequencies(words);

    let mut scores: Vec<LetterScore> = words
        .iter()
        .filter(|word| word.distinct_letters() == distinct)
        .map(|word| LetterScore {
            word: word.text().to_string(),
            score: word
                .letters()
                .iter()
                .map(|letter| frequencies.get(letter).copied().unwrap_or(0.0))
                .sum(),
        })
        .collect();

    scores.sort_by(|a, b| {
        let by_score = match order {
            ScoreOrder::Largest => b.score.total_cmp(&a.score),
            ScoreOrder::Smallest => a.score.total_cmp(&b.score),
        };
        by_score.then_with(|| a.word.cmp(&b.word))
    });
    scores.truncate(limit);
    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use crate::test_utils::words;
    use crate::wordlists::{WordListProvider, WordLists};

    #[test]
    fn frequencies_sum_to_one() {
        let freqs = letter_frequencies(&words(&["sheep", "spent", "llama"]));
        let total: f64 = freqs.values().sum();
        assert!((total - 1.0).abs() < 1e-9);

        // e appears 3 times in 15 letters
        assert!((freqs[&b'e'] - 3.0 / 15.0).abs() < 1e-9);
    }

    #[test]
    fn frequencies_of_empty_list() {
        assert!(letter_frequencies(&[]).is_empty());
    }

    #[test]
    fn only_words_with_requested_distinct_letters() {
        let list = words(&["llama", "sheep", "mamma", "crate", "eerie"]);
        let scores = score_words(&list, 3, 10, ScoreOrder::Largest);
        let texts: Vec<&str> = scores.iter().map(|s| s.word.as_str()).collect();

        // llama {l,a,m}, eerie {e,r,i}; mamma has two, sheep four
        assert_eq!(texts.len(), 2);
        assert!(texts.contains(&"llama"));
        assert!(texts.contains(&"eerie"));
    }

    #[test]
    fn largest_and_smallest_orders() {
        let list = words(&["aaabb", "aaacc", "bbbcc", "abcab"]);
        let largest = score_words(&list, 2, 10, ScoreOrder::Largest);
        let smallest = score_words(&list, 2, 10, ScoreOrder::Smallest);

        assert_eq!(largest.len(), 3);
        assert!(largest.windows(2).all(|p| p[0].score >= p[1].score));
        assert!(smallest.windows(2).all(|p| p[0].score <= p[1].score));
        let best = largest.first().map(|s| &s.word);
        assert_eq!(best, smallest.last().map(|s| &s.word));
    }

    #[test]
    fn limit_truncates() {
        let list = WordLists::embedded().words(&GameConfig::default());
        let scores = score_words(&list, 5, 3, ScoreOrder::Largest);
        assert_eq!(scores.len(), 3);
    }
}
