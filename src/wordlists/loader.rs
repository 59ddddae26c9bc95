//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// One word per line. Blank lines, `#` comments and invalid entries are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(&content))
}

/// Parse newline-separated text into words
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::words_from_slice;
/// use hangman::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["react", "Node", "API"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "REACT");
        assert_eq!(words[1].text(), "NODE");
        assert_eq!(words[2].text(), "API");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["react", "use state", "", "h2", "crud"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "REACT");
        assert_eq!(words[1].text(), "CRUD");
    }

    #[test]
    fn words_from_lines_skips_blanks_and_comments() {
        let words = words_from_lines("# frameworks\nreact\n\n  vercel  \nnot valid\n");

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "REACT");
        assert_eq!(words[1].text(), "VERCEL");
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let err = load_from_file("definitely/not/here.txt").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = std::env::temp_dir().join(format!("hangman-loader-{}.txt", std::process::id()));
        fs::write(&path, "expo\nhooks\n").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words.len(), 2);
        assert_eq!(words[1].text(), "HOOKS");
    }

    #[test]
    fn load_from_embedded_words() {
        use crate::wordlists::WORDS;

        let words = words_from_slice(WORDS);
        assert_eq!(words.len(), WORDS.len());
    }
}
