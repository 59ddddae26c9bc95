//! The pool of secret words a game can draw from

use crate::core::Word;
use crate::wordlists::{WORDS, loader};
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::path::{Path, PathBuf};
use tracing::info;

/// Errors that can occur when building a vocabulary.
#[derive(Debug, thiserror::Error)]
pub enum VocabularyError {
    #[error("vocabulary has no valid words")]
    Empty,

    #[error("failed to read word list {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// A non-empty list of candidate words
#[derive(Debug, Clone)]
pub struct Vocabulary {
    words: Vec<Word>,
}

impl Vocabulary {
    /// Wrap a list of words
    ///
    /// # Errors
    ///
    /// Returns `VocabularyError::Empty` if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, VocabularyError> {
        if words.is_empty() {
            return Err(VocabularyError::Empty);
        }
        Ok(Self { words })
    }

    /// The word list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            words: loader::words_from_slice(WORDS),
        }
    }

    /// Load a vocabulary from a file with one word per line
    ///
    /// # Errors
    ///
    /// Returns `VocabularyError::Read` if the file cannot be read, or
    /// `VocabularyError::Empty` if it holds no valid word.
    pub fn from_file(path: &Path) -> Result<Self, VocabularyError> {
        let words = loader::load_from_file(path).map_err(|source| VocabularyError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), count = words.len(), "Loaded word list");
        Self::new(words)
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false, see [`Vocabulary::new`]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Pick a word uniformly at random
    ///
    /// # Panics
    /// Will not panic - construction guarantees at least one word.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        self.words
            .choose(rng)
            .expect("vocabulary is never empty")
    }
}
