//! Shared helpers for unit tests

use crate::core::{GameConfig, Word};

/// A word under the default five-letter configuration
pub fn word(text: &str) -> Word {
    Word::new(text, &GameConfig::default()).unwrap()
}

/// Words under the default five-letter configuration, in order
pub fn words(texts: &[&str]) -> Vec<Word> {
    texts.iter().map(|text| word(text)).collect()
}

/// The text of each word, in order
pub fn texts(words: &[Word]) -> Vec<&str> {
    words.iter().map(Word::text).collect()
}
