//! Constraint derivation
//!
//! Turns a (guess, mark) pair into restrictions on how often each letter may
//! occur in the answer and which letters each position may hold. Restrictions
//! from successive guesses combine by intersection, so they only tighten.

use crate::core::{Feedback, LetterSet, Mark, Word, WordError};
use rustc_hash::FxHashMap;

/// A set of allowed letter counts stored as a 64-bit mask
///
/// Bit `n` is set when a count of `n` is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CountSet(u64);

impl CountSet {
    /// Exactly `count` occurrences
    #[must_use]
    pub const fn exactly(count: usize) -> Self {
        Self::range(count, count)
    }

    /// Any count in `min..=max`; empty when `min > max`
    #[must_use]
    pub const fn range(min: usize, max: usize) -> Self {
        if min > max || min > 63 {
            return Self(0);
        }
        let max = if max > 63 { 63 } else { max };
        Self((u64::MAX >> (63 - max)) & (u64::MAX << min))
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, count: usize) -> bool {
        count < 64 && self.0 & (1 << count) != 0
    }

    #[inline]
    #[must_use]
    pub const fn intersect(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate over allowed counts in ascending order
    pub fn iter(self) -> impl Iterator<Item = usize> {
        (0..64).filter(move |&count| self.contains(count))
    }
}

/// Allowed occurrence counts per letter
///
/// Letters without an entry are unconstrained.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CharCountConstraint(FxHashMap<u8, CountSet>);

impl CharCountConstraint {
    #[must_use]
    pub fn allowed(&self, letter: u8) -> Option<CountSet> {
        self.0.get(&letter).copied()
    }

    /// Restrict `letter` to `counts`, intersecting with any existing entry
    pub fn restrict(&mut self, letter: u8, counts: CountSet) {
        self.0
            .entry(letter)
            .and_modify(|existing| *existing = existing.intersect(counts))
            .or_insert(counts);
    }

    pub fn intersect(&mut self, other: &Self) {
        for (&letter, &counts) in &other.0 {
            self.restrict(letter, counts);
        }
    }

    /// Check every constrained letter's count in `word`
    #[must_use]
    pub fn allows(&self, word: &Word) -> bool {
        self.0
            .iter()
            .all(|(&letter, counts)| counts.contains(word.count_of(letter)))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Allowed letters per position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionConstraint(Vec<LetterSet>);

impl PositionConstraint {
    /// Every position allows every letter
    #[must_use]
    pub fn unconstrained(word_length: usize) -> Self {
        Self(vec![LetterSet::ALL; word_length])
    }

    /// Letters allowed at `position`; positions past the end are unconstrained
    #[must_use]
    pub fn allowed(&self, position: usize) -> LetterSet {
        self.0.get(position).copied().unwrap_or(LetterSet::ALL)
    }

    pub fn intersect(&mut self, other: &Self) {
        if self.0.len() < other.0.len() {
            self.0.resize(other.0.len(), LetterSet::ALL);
        }
        for (mine, theirs) in self.0.iter_mut().zip(&other.0) {
            *mine = mine.intersect(*theirs);
        }
    }

    /// Check that every letter of `word` is allowed where it stands
    #[must_use]
    pub fn allows(&self, word: &Word) -> bool {
        self.0
            .iter()
            .zip(word.letters())
            .all(|(allowed, &letter)| allowed.contains(letter))
    }
}

/// Derive the count and position constraints implied by one guess
///
/// For each letter of the guess, `confirmed` counts its correct or present
/// marks and `denied` its absent marks. Any denial pins the answer's count to
/// exactly `confirmed`; otherwise the count is at least `confirmed`.
/// A correct position allows only the guessed letter; any other mark rules
/// the guessed letter out at that position.
///
/// # Errors
/// Returns `WordError::MarkLengthMismatch` if the mark and guess differ in
/// length.
///
/// # Examples
/// ```
/// use wordle_sim::core::{GameConfig, Mark, Word};
/// use wordle_sim::solver::derive;
///
/// let config = GameConfig::default();
/// let guess = Word::new("arose", &config).unwrap();
/// let mark: Mark = "YG--G".parse().unwrap();
///
/// let (counts, positions) = derive(&guess, &mark).unwrap();
/// assert!(counts.allowed(b'o').unwrap().contains(0));
/// assert!(!positions.allowed(0).contains(b'a'));
/// ```
pub fn derive(
    guess: &Word,
    mark: &Mark,
) -> Result<(CharCountConstraint, PositionConstraint), WordError> {
    let length = guess.letters().len();
    if mark.feedback().len() != length {
        return Err(WordError::MarkLengthMismatch {
            guess: guess.text().to_string(),
            mark: mark.feedback().len(),
        });
    }

    // (confirmed, denied) per letter
    let mut tallies: FxHashMap<u8, (usize, usize)> = FxHashMap::default();
    let mut positions = Vec::with_capacity(length);

    for (&letter, &feedback) in guess.letters().iter().zip(mark.feedback()) {
        let tally = tallies.entry(letter).or_insert((0, 0));
        match feedback {
            Feedback::Correct => {
                tally.0 += 1;
                positions.push(LetterSet::single(letter));
            }
            Feedback::Present => {
                tally.0 += 1;
                positions.push(LetterSet::ALL.without(letter));
            }
            Feedback::Absent => {
                tally.1 += 1;
                positions.push(LetterSet::ALL.without(letter));
            }
        }
    }

    let mut counts = CharCountConstraint::default();
    for (letter, (confirmed, denied)) in tallies {
        let allowed = if denied > 0 {
            CountSet::exactly(confirmed)
        } else {
            CountSet::range(confirmed, length)
        };
        counts.restrict(letter, allowed);
    }

    Ok((counts, PositionConstraint(positions)))
}

/// Accumulated constraints from every guess of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraints {
    counts: CharCountConstraint,
    positions: PositionConstraint,
}

impl Constraints {
    /// No restrictions yet
    #[must_use]
    pub fn unconstrained(word_length: usize) -> Self {
        Self {
            counts: CharCountConstraint::default(),
            positions: PositionConstraint::unconstrained(word_length),
        }
    }

    /// Constraints implied by a single guess
    ///
    /// # Errors
    /// See [`derive`].
    pub fn from_guess(guess: &Word, mark: &Mark) -> Result<Self, WordError> {
        let (counts, positions) = derive(guess, mark)?;
        Ok(Self { counts, positions })
    }

    /// Tighten with another set of constraints
    pub fn merge(&mut self, other: &Self) {
        self.counts.intersect(&other.counts);
        self.positions.intersect(&other.positions);
    }

    #[must_use]
    pub const fn counts(&self) -> &CharCountConstraint {
        &self.counts
    }

    #[must_use]
    pub const fn positions(&self) -> &PositionConstraint {
        &self.positions
    }

    #[must_use]
    pub fn allows(&self, word: &Word) -> bool {
        self.counts.allows(word) && self.positions.allows(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::word;

    fn derived(guess: &str, answer: &str) -> Constraints {
        let guess = word(guess);
        let mark = Mark::calculate(&guess, &word(answer)).unwrap();
        Constraints::from_guess(&guess, &mark).unwrap()
    }

    #[test]
    fn count_set_range_and_exact() {
        let range = CountSet::range(1, 5);
        assert!(!range.contains(0));
        assert!(range.contains(1));
        assert!(range.contains(5));
        assert!(!range.contains(6));
        assert_eq!(range.iter().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);

        let exact = CountSet::exactly(0);
        assert_eq!(exact.iter().collect::<Vec<_>>(), vec![0]);
        assert!(exact.intersect(range).is_empty());
    }

    #[test]
    fn count_set_edges() {
        assert!(CountSet::range(3, 2).is_empty());
        assert!(CountSet::range(0, 63).contains(63));
        assert!(!CountSet::range(0, 63).contains(64));
        assert!(CountSet::exactly(63).contains(63));
    }

    #[test]
    fn derive_absent_letter_has_zero_count() {
        let constraints = derived("arose", "crate");
        let counts = constraints.counts();

        assert_eq!(counts.allowed(b'o'), Some(CountSet::exactly(0)));
        assert_eq!(counts.allowed(b's'), Some(CountSet::exactly(0)));
        assert_eq!(counts.allowed(b'a'), Some(CountSet::range(1, 5)));
        assert_eq!(counts.allowed(b'r'), Some(CountSet::range(1, 5)));
        assert_eq!(counts.allowed(b'z'), None);
        assert_eq!(counts.len(), 5);
    }

    #[test]
    fn derive_positions() {
        let constraints = derived("arose", "crate");
        let positions = constraints.positions();

        // Present A is excluded at its own position only
        assert!(!positions.allowed(0).contains(b'a'));
        assert!(positions.allowed(2).contains(b'a'));

        // Correct R and E pin their positions
        assert_eq!(positions.allowed(1), LetterSet::single(b'r'));
        assert_eq!(positions.allowed(4), LetterSet::single(b'e'));
    }

    #[test]
    fn derive_duplicate_with_denial_is_exact() {
        // SHEEP vs SPENT: one E scores, the other is denied
        let constraints = derived("sheep", "spent");
        let counts = constraints.counts();
        assert_eq!(counts.allowed(b'e'), Some(CountSet::exactly(1)));
        assert_eq!(counts.allowed(b'h'), Some(CountSet::exactly(0)));
    }

    #[test]
    fn derive_duplicate_without_denial_is_lower_bound() {
        // SPEED vs ERASE: both E's score, ERASE could hold more
        let constraints = derived("speed", "erase");
        let counts = constraints.counts();
        assert_eq!(counts.allowed(b'e'), Some(CountSet::range(2, 5)));
    }

    #[test]
    fn derive_rejects_mark_length_mismatch() {
        let guess = word("crate");
        let mark = Mark::parse("GG").unwrap();
        assert!(matches!(
            derive(&guess, &mark),
            Err(WordError::MarkLengthMismatch { mark: 2, .. })
        ));
    }

    #[test]
    fn derived_constraints_admit_the_answer() {
        for (guess, answer) in [
            ("arose", "crate"),
            ("sheep", "spent"),
            ("speed", "erase"),
            ("robot", "floor"),
            ("llama", "hello"),
            ("eerie", "crate"),
        ] {
            assert!(
                derived(guess, answer).allows(&word(answer)),
                "{answer} rejected by its own mark for {guess}"
            );
        }
    }

    #[test]
    fn derived_constraints_reject_the_guess() {
        let constraints = derived("arose", "crate");
        assert!(!constraints.allows(&word("arose")));
    }

    #[test]
    fn merge_only_tightens() {
        let mut constraints = derived("arose", "crate");
        let before = constraints.clone();

        constraints.merge(&derived("trace", "crate"));

        for text in ["crate", "grate", "irate", "trace", "crane", "haste"] {
            let w = word(text);
            if constraints.allows(&w) {
                assert!(before.allows(&w), "{text} allowed only after merging");
            }
        }
        assert!(constraints.allows(&word("crate")));
        assert!(!constraints.allows(&word("trace")));
    }

    #[test]
    fn merge_with_unconstrained_is_identity() {
        let mut constraints = derived("sheep", "spent");
        let before = constraints.clone();
        constraints.merge(&Constraints::unconstrained(5));
        assert_eq!(constraints, before);
    }

    #[test]
    fn unconstrained_allows_everything() {
        let constraints = Constraints::unconstrained(5);
        assert!(constraints.counts().is_empty());
        for text in ["crate", "zzzzz", "sheep"] {
            assert!(constraints.allows(&word(text)));
        }
    }
}
