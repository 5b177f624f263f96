//! Accumulated knowledge about the hidden word.
//!
//! [`ConstraintState`] keeps, for every position, the letters that may still
//! appear there, plus the letters known to appear somewhere. It only ever
//! narrows: letters leave position sets and join the required set.

use crate::WORD_LENGTH;
use crate::feedback::{FeedbackEvent, Mark};
use std::fmt;

const ALPHABET_SIZE: u32 = 26;

/// A set of uppercase letters `A`-`Z`, one bit per letter.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    pub const EMPTY: Self = Self(0);
    pub const ALPHABET: Self = Self((1 << ALPHABET_SIZE) - 1);

    fn bit(letter: char) -> Option<u32> {
        letter
            .is_ascii_uppercase()
            .then(|| 1 << (letter as u32 - 'A' as u32))
    }

    #[must_use]
    pub fn singleton(letter: char) -> Self {
        Self(Self::bit(letter).unwrap_or(0))
    }

    #[must_use]
    pub fn contains(self, letter: char) -> bool {
        Self::bit(letter).is_some_and(|bit| self.0 & bit != 0)
    }

    pub fn insert(&mut self, letter: char) {
        if let Some(bit) = Self::bit(letter) {
            self.0 |= bit;
        }
    }

    pub fn remove(&mut self, letter: char) {
        if let Some(bit) = Self::bit(letter) {
            self.0 &= !bit;
        }
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Letters in alphabetical order.
    pub fn iter(self) -> impl Iterator<Item = char> {
        ('A'..='Z').filter(move |&c| self.contains(c))
    }
}

impl FromIterator<char> for LetterSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for c in iter {
            set.insert(c);
        }
        set
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters: String = self.iter().collect();
        write!(f, "{{{letters}}}")
    }
}

/// Positional and existence constraints gathered from feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintState {
    position_sets: [LetterSet; WORD_LENGTH],
    required_chars: LetterSet,
}

impl Default for ConstraintState {
    fn default() -> Self {
        Self::new()
    }
}

impl ConstraintState {
    /// Every position open to the whole alphabet, nothing required.
    #[must_use]
    pub fn new() -> Self {
        Self {
            position_sets: [LetterSet::ALPHABET; WORD_LENGTH],
            required_chars: LetterSet::EMPTY,
        }
    }

    /// Folds one round of feedback into the state.
    ///
    /// An absent letter is struck from every position except those already
    /// pinned to a single letter and those this same event marks correct with
    /// that letter, so the outcome does not depend on slot order.
    pub fn update(&mut self, event: &FeedbackEvent) {
        for (position, feedback) in event.iter().enumerate() {
            let letter = feedback.letter();
            match feedback.mark() {
                Mark::Absent => {
                    for (other, allowed) in self.position_sets.iter_mut().enumerate() {
                        if allowed.len() == 1 || event.is_correct_at(other, letter) {
                            continue;
                        }
                        allowed.remove(letter);
                    }
                }
                Mark::Present => {
                    self.position_sets[position].remove(letter);
                    self.required_chars.insert(letter);
                }
                Mark::Correct => {
                    self.position_sets[position] = LetterSet::singleton(letter);
                    self.required_chars.insert(letter);
                }
            }
        }
    }

    #[must_use]
    pub fn position_sets(&self) -> &[LetterSet; WORD_LENGTH] {
        &self.position_sets
    }

    #[must_use]
    pub fn required_chars(&self) -> LetterSet {
        self.required_chars
    }

    /// Whether `letter` may still appear at `position`.
    #[must_use]
    pub fn allows(&self, position: usize, letter: char) -> bool {
        self.position_sets
            .get(position)
            .is_some_and(|allowed| allowed.contains(letter))
    }

    #[must_use]
    pub fn is_pinned(&self, position: usize) -> bool {
        self.position_sets
            .get(position)
            .is_some_and(|allowed| allowed.len() == 1)
    }
}
