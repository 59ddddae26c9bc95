//! Secret word representation
//!
//! A Word stores an uppercase word along with the set of distinct letters it uses,
//! so guesses and win checks are set lookups.

use super::Letter;
use rustc_hash::FxHashSet;
use std::fmt;

/// A hangman word, uppercase ASCII letters only
#[derive(Debug, Clone)]
pub struct Word {
    text: String,
    letters: FxHashSet<u8>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The word is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Word;
    ///
    /// let word = Word::new("node").unwrap();
    /// assert_eq!(word.text(), "NODE");
    ///
    /// assert!(Word::new("two words").is_err());
    /// assert!(Word::new("h3llo").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_ascii_uppercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let letters = text.bytes().collect();

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters, counting repeats
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false, words are never empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: Letter) -> bool {
        self.letters.contains(&letter.byte())
    }

    /// Number of distinct letters
    #[inline]
    #[must_use]
    pub fn distinct_letters(&self) -> usize {
        self.letters.len()
    }

    /// True when every distinct letter of the word is among `guessed`
    #[must_use]
    pub fn is_revealed_by(&self, guessed: &[Letter]) -> bool {
        self.letters
            .iter()
            .all(|&b| guessed.iter().any(|g| g.byte() == b))
    }

    /// The word with unguessed letters replaced by `_`, space separated
    ///
    /// ```
    /// use hangman::core::{Letter, Word};
    ///
    /// let word = Word::new("NODE").unwrap();
    /// let guessed = [Letter::parse("o").unwrap(), Letter::parse("e").unwrap()];
    /// assert_eq!(word.masked(&guessed), "_ O _ E");
    /// ```
    #[must_use]
    pub fn masked(&self, guessed: &[Letter]) -> String {
        let cells: Vec<String> = self
            .text
            .chars()
            .map(|c| {
                if guessed.iter().any(|g| g.as_char() == c) {
                    c.to_string()
                } else {
                    "_".to_string()
                }
            })
            .collect();
        cells.join(" ")
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Word {}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
