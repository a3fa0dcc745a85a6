//! Word list loading utilities
//!
//! Reads raw word lists from files and turns them into validated Words for a
//! particular game configuration.

use crate::core::{GameConfig, Word};
use log::debug;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Read one word per line from a file
///
/// Lines are trimmed; blank lines and `#` comments are skipped. No validation
/// happens here since the word length is only known per run.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_sim::wordlists::loader::read_lines;
///
/// let lines = read_lines("data/words.txt").unwrap();
/// println!("Loaded {} entries", lines.len());
/// ```
pub fn read_lines<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let lines = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect();

    Ok(lines)
}

/// Convert raw entries to the Words valid under `config`
///
/// Entries of another length or with letters outside the alphabet are
/// skipped. Duplicates keep their first position.
///
/// # Examples
/// ```
/// use wordle_sim::core::GameConfig;
/// use wordle_sim::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crate", "toolong", "CRATE", "arose"], &GameConfig::default());
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice<S: AsRef<str>>(entries: &[S], config: &GameConfig) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    let words: Vec<Word> = entries
        .iter()
        .filter_map(|entry| Word::new(entry.as_ref(), config).ok())
        .filter(|word| seen.insert(word.text().to_string()))
        .collect();

    debug!(
        "kept {} of {} entries for length {}",
        words.len(),
        entries.len(),
        config.word_length()
    );
    words
}
