//! Feedback values and the `<LETTER>:<MARK>` line grammar.
//!
//! A line such as `I:C R:Y A:G T:C E:Y` becomes one [`FeedbackEvent`]:
//! five letters, each tagged with the [`Mark`] the game showed for it.

use crate::WORD_LENGTH;
use crate::error::ParseError;
use std::fmt;
use std::str::FromStr;

/// Feedback for a single guessed letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Letter not in the word (charcoal)
    Absent,
    /// Letter in the word, wrong position (yellow)
    Present,
    /// Letter in the correct position (green)
    Correct,
}

/// Mapping between marks and the single-letter codes typed and printed.
const MARK_CODES: [(Mark, char); 3] = [
    (Mark::Absent, 'C'),
    (Mark::Present, 'Y'),
    (Mark::Correct, 'G'),
];

impl Mark {
    pub fn to_char(self) -> char {
        MARK_CODES
            .iter()
            .find(|(mark, _)| *mark == self)
            .map_or('?', |(_, code)| *code)
    }

    /// Parse a mark code, case-insensitively.
    pub fn from_char(c: char) -> Option<Self> {
        let c = c.to_ascii_uppercase();
        MARK_CODES
            .iter()
            .find(|(_, code)| *code == c)
            .map(|(mark, _)| *mark)
    }
}

/// One guessed letter together with its mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterFeedback {
    letter: char,
    mark: Mark,
}

impl LetterFeedback {
    /// Builds the pair, normalising the letter to uppercase.
    ///
    /// # Errors
    /// Returns [`ParseError::InvalidLetter`] if `letter` is not an ASCII letter.
    pub fn new(letter: char, mark: Mark) -> Result<Self, ParseError> {
        if !letter.is_ascii_alphabetic() {
            return Err(ParseError::InvalidLetter(letter.to_string()));
        }
        Ok(Self {
            letter: letter.to_ascii_uppercase(),
            mark,
        })
    }

    #[must_use]
    pub fn letter(&self) -> char {
        self.letter
    }

    #[must_use]
    pub fn mark(&self) -> Mark {
        self.mark
    }
}

impl FromStr for LetterFeedback {
    type Err = ParseError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let (letter, mark) = token
            .split_once(':')
            .ok_or_else(|| ParseError::MissingSeparator(token.to_string()))?;

        let mut letters = letter.chars();
        let letter = match (letters.next(), letters.next()) {
            (Some(c), None) => c,
            _ => return Err(ParseError::InvalidLetter(letter.to_string())),
        };

        let mut codes = mark.chars();
        let mark = match (codes.next(), codes.next()) {
            (Some(c), None) => {
                Mark::from_char(c).ok_or_else(|| ParseError::UnknownMark(mark.to_string()))?
            }
            _ => return Err(ParseError::UnknownMark(mark.to_string())),
        };

        Self::new(letter, mark)
    }
}

/// A full guess-and-response round: one [`LetterFeedback`] per position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackEvent([LetterFeedback; WORD_LENGTH]);

impl FeedbackEvent {
    #[must_use]
    pub fn new(letters: [LetterFeedback; WORD_LENGTH]) -> Self {
        Self(letters)
    }

    /// Pairs a guessed word with the marks shown for it.
    ///
    /// # Errors
    /// Returns [`ParseError::InvalidGuess`] unless `guess` is five ASCII letters.
    pub fn from_guess(guess: &str, marks: [Mark; WORD_LENGTH]) -> Result<Self, ParseError> {
        let chars: Vec<char> = guess.chars().collect();
        if chars.len() != WORD_LENGTH || !chars.iter().all(char::is_ascii_alphabetic) {
            return Err(ParseError::InvalidGuess(guess.to_string()));
        }

        let mut letters = [LetterFeedback {
            letter: 'A',
            mark: Mark::Absent,
        }; WORD_LENGTH];
        for (slot, (&c, mark)) in letters.iter_mut().zip(chars.iter().zip(marks)) {
            *slot = LetterFeedback::new(c, mark)?;
        }
        Ok(Self(letters))
    }

    /// Letter/mark pairs in position order.
    pub fn iter(&self) -> impl Iterator<Item = &LetterFeedback> {
        self.0.iter()
    }

    #[must_use]
    pub fn letters(&self) -> &[LetterFeedback; WORD_LENGTH] {
        &self.0
    }

    /// The guessed word, uppercase.
    #[must_use]
    pub fn guess(&self) -> String {
        self.0.iter().map(LetterFeedback::letter).collect()
    }

    /// Whether the slot at `position` marks `letter` as correct.
    #[must_use]
    pub fn is_correct_at(&self, position: usize, letter: char) -> bool {
        self.0
            .get(position)
            .is_some_and(|lf| lf.mark == Mark::Correct && lf.letter == letter)
    }
}

impl FromStr for FeedbackEvent {
    type Err = ParseError;

    /// Parses whitespace-separated `<LETTER>:<MARK>` tokens, case-insensitively.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != WORD_LENGTH {
            return Err(ParseError::WrongTokenCount {
                found: tokens.len(),
            });
        }

        let mut letters = [LetterFeedback {
            letter: 'A',
            mark: Mark::Absent,
        }; WORD_LENGTH];
        for (slot, token) in letters.iter_mut().zip(tokens) {
            *slot = token.parse()?;
        }
        Ok(Self(letters))
    }
}

impl fmt::Display for FeedbackEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marks: String = self.0.iter().map(|lf| lf.mark.to_char()).collect();
        write!(f, "{}[{marks}]", self.guess())
    }
}
