//! Wordle feedback calculation and representation
//!
//! A mark holds one symbol per letter of the guess:
//! - Absent (letter not in the answer, after duplicates already matched)
//! - Present (letter in the answer, wrong position)
//! - Correct (letter in the right position)

use super::{Word, WordError};
use std::fmt;

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    Absent,
    Present,
    Correct,
}

impl Feedback {
    /// Plain-text symbol: `G`, `Y` or `-`
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Parse a symbol as accepted by [`Mark::parse`]
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Feedback for a whole guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Mark(Vec<Feedback>);

impl Mark {
    #[inline]
    #[must_use]
    pub fn feedback(&self) -> &[Feedback] {
        &self.0
    }

    /// Check if every letter is correct
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&f| f == Feedback::Correct)
    }

    /// Calculate the mark when `guess` is guessed and `answer` is the target
    ///
    /// Implements Wordle's exact feedback rules, including duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches correct and remove them from the pool
    ///    of answer letters
    /// 2. Second pass: mark a letter present only while the pool still holds
    ///    an unmatched copy of it, consuming that copy
    ///
    /// # Errors
    /// Returns `WordError::LengthMismatch` if the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_sim::core::{GameConfig, Mark, Word};
    ///
    /// let config = GameConfig::default();
    /// let guess = Word::new("arose", &config).unwrap();
    /// let answer = Word::new("crate", &config).unwrap();
    ///
    /// let mark = Mark::calculate(&guess, &answer).unwrap();
    /// assert_eq!(mark.to_string(), "YG--G");
    /// ```
    pub fn calculate(guess: &Word, answer: &Word) -> Result<Self, WordError> {
        if guess.letters().len() != answer.letters().len() {
            return Err(WordError::LengthMismatch {
                guess: guess.text().to_string(),
                answer: answer.text().to_string(),
            });
        }

        let mut result = vec![Feedback::Absent; guess.letters().len()];
        let mut answer_available = answer.letter_counts();

        // First pass: exact position matches
        let pairs = guess.letters().iter().zip(answer.letters());
        for (slot, (&letter, &target)) in result.iter_mut().zip(pairs) {
            if letter == target {
                *slot = Feedback::Correct;
                if let Some(count) = answer_available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: wrong position, but an unmatched copy remains
        for (slot, &letter) in result.iter_mut().zip(guess.letters()) {
            if *slot == Feedback::Correct {
                continue;
            }
            if let Some(count) = answer_available.get_mut(&letter)
                && *count > 0
            {
                *slot = Feedback::Present;
                *count -= 1;
            }
        }

        Ok(Self(result))
    }

    /// Parse a mark from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/⬜ for absent
    ///
    /// Returns `None` for an empty string or any other character.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let feedback = s
            .chars()
            .map(Feedback::from_symbol)
            .collect::<Option<Vec<_>>>()?;
        if feedback.is_empty() {
            return None;
        }
        Some(Self(feedback))
    }

    /// Convert the mark to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|f| f.emoji()).collect()
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for feedback in &self.0 {
            write!(f, "{}", feedback.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Mark {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid mark string: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::Feedback::{Absent, Correct, Present};
    use super::*;
    use crate::core::GameConfig;
    use crate::test_utils::word;

    fn mark(guess: &str, answer: &str) -> Mark {
        let config = GameConfig::with_length(guess.len()).unwrap();
        let guess = Word::new(guess, &config).unwrap();
        let answer = Word::new(answer, &config).unwrap();
        Mark::calculate(&guess, &answer).unwrap()
    }

    #[test]
    fn mark_all_absent() {
        let m = mark("abcde", "fghij");
        assert_eq!(m.feedback(), &[Absent; 5]);
        assert_eq!(m.to_string(), "-----");
        assert!(!m.is_solved());
    }

    #[test]
    fn mark_word_against_itself_is_solved() {
        for text in ["crate", "sheep", "llama", "zzzzz", "aaaaa"] {
            let m = mark(text, text);
            assert!(m.is_solved(), "{text} should be solved against itself");
            assert_eq!(m.to_string(), "GGGGG");
        }
    }

    #[test]
    fn mark_is_deterministic() {
        assert_eq!(mark("speed", "erase"), mark("speed", "erase"));
    }

    #[test]
    fn mark_arose_against_crate() {
        // R and E sit in the same positions in both words; A is elsewhere
        assert_eq!(
            mark("arose", "crate").feedback(),
            &[Present, Correct, Absent, Absent, Correct]
        );
    }

    #[test]
    fn mark_sheep_against_spent_does_not_double_count() {
        let m = mark("sheep", "spent");
        assert_eq!(m.feedback(), &[Correct, Absent, Correct, Absent, Present]);

        // SPENT has one E, so only one of the two guessed E's can score
        let e_hits = [2, 3].into_iter().filter(|&i| m.feedback()[i] != Absent);
        assert_eq!(e_hits.count(), 1);
    }

    #[test]
    fn mark_duplicate_present_limited_by_answer_count() {
        // SPEED vs ERASE: ERASE has two E's, both guessed E's score
        assert_eq!(
            mark("speed", "erase").feedback(),
            &[Present, Absent, Present, Present, Absent]
        );

        // EERIE vs CRATE: only one E in CRATE, claimed by the exact match
        assert_eq!(
            mark("eerie", "crate").feedback(),
            &[Absent, Absent, Present, Absent, Correct]
        );
    }

    #[test]
    fn mark_correct_takes_priority_over_earlier_present() {
        // ROBOT vs FLOOR: second O is exact, first O takes the remaining copy
        assert_eq!(
            mark("robot", "floor").feedback(),
            &[Present, Present, Absent, Correct, Absent]
        );

        // LLAMA vs HELLO: both L's present, A's absent
        assert_eq!(
            mark("llama", "hello").feedback(),
            &[Present, Present, Absent, Absent, Absent]
        );
    }

    #[test]
    fn mark_other_word_lengths() {
        assert_eq!(
            mark("tear", "rate").feedback(),
            &[Present, Present, Present, Present]
        );
        assert!(mark("orange", "orange").is_solved());
    }

    #[test]
    fn mark_length_mismatch_is_an_error() {
        let five = word("crate");
        let config = GameConfig::with_length(4).unwrap();
        let four = Word::new("rate", &config).unwrap();

        assert_eq!(
            Mark::calculate(&five, &four),
            Err(WordError::LengthMismatch {
                guess: "crate".to_string(),
                answer: "rate".to_string()
            })
        );
    }

    #[test]
    fn mark_parse_valid() {
        let m1 = Mark::parse("GYG--").unwrap();
        let m2 = Mark::parse("🟩🟨🟩⬜⬜").unwrap();
        let m3 = Mark::parse("gyg__").unwrap();

        assert_eq!(m1, m2);
        assert_eq!(m1, m3);
        assert_eq!(m1.feedback(), &[Correct, Present, Correct, Absent, Absent]);
        assert_eq!("GYG--".parse::<Mark>(), Ok(m1));
    }

    #[test]
    fn mark_parse_invalid() {
        assert!(Mark::parse("GXGGY").is_none());
        assert!(Mark::parse("").is_none());
        assert!("G?".parse::<Mark>().is_err());
    }

    #[test]
    fn mark_display_and_emoji() {
        let m = mark("arose", "crate");
        assert_eq!(m.to_string(), "YG--G");
        assert_eq!(m.to_emoji(), "🟨🟩⬜⬜🟩");
    }
}
