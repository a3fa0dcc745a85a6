//! Game configuration
//!
//! The alphabet and word length used by a run. Every component receives these
//! explicitly instead of reading module-level constants.

use std::fmt;
use thiserror::Error;

/// The 26 lowercase ASCII letters
pub const DEFAULT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Classic Wordle word length
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Longest supported word; letter counts are tracked in a 64-bit mask
pub const MAX_WORD_LENGTH: usize = 63;

/// Error type for invalid configurations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("alphabet must contain at least one letter")]
    EmptyAlphabet,
    #[error("alphabet letter {0:?} is not a printable ASCII character")]
    InvalidLetter(char),
    #[error("alphabet letter {0:?} appears more than once")]
    DuplicateLetter(char),
    #[error("word length must be between 1 and {max}, got {0}", max = MAX_WORD_LENGTH)]
    InvalidWordLength(usize),
}

/// A set of ASCII letters stored as a 128-bit mask
///
/// Bit `n` is set when the byte `n` is a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterSet(u128);

impl LetterSet {
    /// No letters
    pub const EMPTY: Self = Self(0);

    /// Every ASCII byte; the identity for [`LetterSet::intersect`]
    pub const ALL: Self = Self(u128::MAX);

    /// A set holding exactly one letter
    #[inline]
    #[must_use]
    pub const fn single(letter: u8) -> Self {
        debug_assert!(letter < 128, "letters must be ASCII");
        Self(1 << letter)
    }

    /// This set plus `letter`
    #[inline]
    #[must_use]
    pub const fn with(self, letter: u8) -> Self {
        Self(self.0 | Self::single(letter).0)
    }

    /// This set minus `letter`
    #[inline]
    #[must_use]
    pub const fn without(self, letter: u8) -> Self {
        Self(self.0 & !Self::single(letter).0)
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        letter < 128 && self.0 & (1 << letter) != 0
    }

    #[inline]
    #[must_use]
    pub const fn intersect(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate over members in ascending byte order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..128u8).filter(move |&letter| self.contains(letter))
    }
}

/// The set of letters words may be built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    letters: String,
    set: LetterSet,
}

impl Alphabet {
    /// Create an alphabet from its letters
    ///
    /// Letters are lowercased. Each must be a printable ASCII character and
    /// appear only once.
    ///
    /// # Errors
    /// Returns `ConfigError` if the alphabet is empty, holds a non-ASCII or
    /// non-printable character, or repeats a letter.
    pub fn new(letters: &str) -> Result<Self, ConfigError> {
        let letters = letters.to_lowercase();
        if letters.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }

        let mut set = LetterSet::EMPTY;
        for ch in letters.chars() {
            if !ch.is_ascii_graphic() {
                return Err(ConfigError::InvalidLetter(ch));
            }
            let byte = ch as u8;
            if set.contains(byte) {
                return Err(ConfigError::DuplicateLetter(ch));
            }
            set = set.with(byte);
        }

        Ok(Self { letters, set })
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &str {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub const fn set(&self) -> LetterSet {
        self.set
    }

    #[inline]
    #[must_use]
    pub const fn contains(&self, letter: u8) -> bool {
        self.set.contains(letter)
    }

    /// Check a character, rejecting anything outside ASCII
    #[inline]
    #[must_use]
    pub fn contains_char(&self, ch: char) -> bool {
        ch.is_ascii() && self.contains(ch as u8)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            letters: DEFAULT_ALPHABET.to_string(),
            set: DEFAULT_ALPHABET
                .bytes()
                .fold(LetterSet::EMPTY, LetterSet::with),
        }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letters)
    }
}

/// Alphabet and word length for a single run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    alphabet: Alphabet,
    word_length: usize,
}

impl GameConfig {
    /// # Errors
    /// Returns `ConfigError::InvalidWordLength` if `word_length` is zero or
    /// above [`MAX_WORD_LENGTH`].
    pub fn new(alphabet: Alphabet, word_length: usize) -> Result<Self, ConfigError> {
        if word_length == 0 || word_length > MAX_WORD_LENGTH {
            return Err(ConfigError::InvalidWordLength(word_length));
        }
        Ok(Self {
            alphabet,
            word_length,
        })
    }

    /// English alphabet with the given word length
    ///
    /// # Errors
    /// Same as [`GameConfig::new`].
    pub fn with_length(word_length: usize) -> Result<Self, ConfigError> {
        Self::new(Alphabet::default(), word_length)
    }

    #[inline]
    #[must_use]
    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::default(),
            word_length: DEFAULT_WORD_LENGTH,
        }
    }
}
