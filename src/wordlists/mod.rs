//! Word lists for the simulator
//!
//! A `WordListProvider` supplies the vocabulary and the usage ordering for a
//! configuration. `WordLists` is the provider used by the binary: embedded
//! lists by default, either list replaceable by a local file.

mod embedded;
pub mod loader;

pub use embedded::{COMMON, COMMON_COUNT, DICTIONARY, DICTIONARY_COUNT};

use crate::core::{GameConfig, Word};
use loader::{read_lines, words_from_slice};
use log::info;
use std::io;
use std::path::Path;

/// Source of the words a run may guess and of their usage ordering
pub trait WordListProvider {
    /// All valid words for `config`, in provider order, without duplicates
    fn words(&self, config: &GameConfig) -> Vec<Word>;

    /// Words for `config` ordered by real-world usage, most common first
    fn usage_ranking(&self, config: &GameConfig) -> Vec<Word>;
}

/// Raw dictionary and usage lists, validated lazily per configuration
#[derive(Debug, Clone, Default)]
pub struct WordLists {
    dictionary: Vec<String>,
    common: Vec<String>,
}

impl WordLists {
    /// Lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(
            DICTIONARY.iter().map(|&w| w.to_string()).collect(),
            COMMON.iter().map(|&w| w.to_string()).collect(),
        )
    }

    #[must_use]
    pub const fn new(dictionary: Vec<String>, common: Vec<String>) -> Self {
        Self { dictionary, common }
    }

    /// Replace the dictionary with the contents of a file
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read.
    pub fn with_dictionary_file<P: AsRef<Path>>(mut self, path: P) -> io::Result<Self> {
        self.dictionary = read_lines(&path)?;
        info!(
            "loaded {} dictionary entries from {}",
            self.dictionary.len(),
            path.as_ref().display()
        );
        Ok(self)
    }

    /// Replace the usage ordering with the contents of a file
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read.
    pub fn with_usage_file<P: AsRef<Path>>(mut self, path: P) -> io::Result<Self> {
        self.common = read_lines(&path)?;
        info!(
            "loaded {} usage entries from {}",
            self.common.len(),
            path.as_ref().display()
        );
        Ok(self)
    }
}

impl WordListProvider for WordLists {
    fn words(&self, config: &GameConfig) -> Vec<Word> {
        words_from_slice(self.dictionary.as_slice(), config)
    }

    fn usage_ranking(&self, config: &GameConfig) -> Vec<Word> {
        words_from_slice(self.common.as_slice(), config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
        assert_eq!(COMMON.len(), COMMON_COUNT);
    }

    #[test]
    fn embedded_entries_are_lowercase_letters() {
        for &word in DICTIONARY.iter().chain(COMMON) {
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_five_letter_words() {
        let config = GameConfig::default();
        let words = WordLists::embedded().words(&config);

        assert!(words.len() > 500);
        assert!(words.iter().all(|w| w.letters().len() == 5));
        for needed in ["crate", "arose", "sheep", "spent"] {
            assert!(
                words.iter().any(|w| w.text() == needed),
                "'{needed}' missing from dictionary"
            );
        }
    }

    #[test]
    fn embedded_lists_cover_other_lengths() {
        let lists = WordLists::embedded();
        for length in [4, 6] {
            let config = GameConfig::with_length(length).unwrap();
            assert!(!lists.words(&config).is_empty(), "no words of length {length}");
        }
    }

    #[test]
    fn usage_words_are_in_dictionary() {
        let config = GameConfig::default();
        let lists = WordLists::embedded();
        let dictionary: FxHashSet<Word> = lists.words(&config).into_iter().collect();

        for word in lists.usage_ranking(&config) {
            assert!(dictionary.contains(&word), "'{word}' not in dictionary");
        }
    }

    #[test]
    fn custom_lists_are_filtered_per_config() {
        let lists = WordLists::new(
            vec!["crate".into(), "rate".into(), "crate".into()],
            vec!["rate".into()],
        );
        let config = GameConfig::default();
        assert_eq!(lists.words(&config).len(), 1);
        assert!(lists.usage_ranking(&config).is_empty());

        let four = GameConfig::with_length(4).unwrap();
        assert_eq!(lists.usage_ranking(&four).len(), 1);
    }
}
