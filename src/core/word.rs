//! Word representation
//!
//! A Word is a validated, lowercase sequence of letters drawn from the
//! configured alphabet, with the length the configuration asks for.

use super::GameConfig;
use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// A fixed-length word over the game alphabet
///
/// Ordering is lexicographic on the text, which is what ranking uses to
/// break ties.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("letter {letter:?} in {word:?} is not in the alphabet")]
    InvalidCharacter { word: String, letter: char },
    #[error("guess {guess:?} and answer {answer:?} have different lengths")]
    LengthMismatch { guess: String, answer: String },
    #[error("mark has {mark} symbols but {guess:?} has {} letters", .guess.len())]
    MarkLengthMismatch { guess: String, mark: usize },
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length differs from the configured word length
    /// - A letter lies outside the configured alphabet
    ///
    /// # Examples
    /// ```
    /// use wordle_sim::core::{GameConfig, Word};
    ///
    /// let config = GameConfig::default();
    /// let word = Word::new("Crate", &config).unwrap();
    /// assert_eq!(word.text(), "crate");
    ///
    /// assert!(Word::new("too long", &config).is_err());
    /// assert!(Word::new("cr4te", &config).is_err());
    /// ```
    pub fn new(text: impl Into<String>, config: &GameConfig) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        let actual = text.chars().count();
        if actual != config.word_length() {
            return Err(WordError::InvalidLength {
                expected: config.word_length(),
                actual,
            });
        }

        if let Some(letter) = text
            .chars()
            .find(|&ch| !config.alphabet().contains_char(ch))
        {
            return Err(WordError::InvalidCharacter { word: text, letter });
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as ASCII bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of times `letter` occurs
    #[inline]
    #[must_use]
    #[allow(clippy::naive_bytecount)]
    pub fn count_of(&self, letter: u8) -> usize {
        self.letters().iter().filter(|&&l| l == letter).count()
    }

    /// Number of different letters in the word
    #[must_use]
    pub fn distinct_letters(&self) -> usize {
        self.letter_counts().len()
    }

    /// Get the count of each letter in the word
    ///
    /// Used for mark calculation with duplicate letters.
    #[inline]
    pub(crate) fn letter_counts(&self) -> FxHashMap<u8, usize> {
        let mut counts = FxHashMap::default();
        for &letter in self.letters() {
            *counts.entry(letter).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
