//! Core domain types for Wordle
//!
//! Words, marks and the configuration they are validated against.
//! All types here are pure and free of I/O.

mod config;
mod mark;
mod word;

pub use config::{
    Alphabet, ConfigError, DEFAULT_ALPHABET, DEFAULT_WORD_LENGTH, GameConfig, LetterSet,
    MAX_WORD_LENGTH,
};
pub use mark::{Feedback, Mark};
pub use word::{Word, WordError};
