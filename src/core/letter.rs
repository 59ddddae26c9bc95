//! A single guessable letter

use std::fmt;

/// One uppercase ASCII letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Parse player input into a letter
    ///
    /// Surrounding whitespace is ignored and the letter is normalized to
    /// uppercase. Returns `None` unless exactly one ASCII letter remains.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Letter;
    ///
    /// assert_eq!(Letter::parse(" n ").map(Letter::as_char), Some('N'));
    /// assert!(Letter::parse("ab").is_none());
    /// assert!(Letter::parse("7").is_none());
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let mut chars = input.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
    }

    /// Build a letter from a character, if it is an ASCII letter
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            // ASCII checked above, so the cast keeps the full value
            Some(Self(c.to_ascii_uppercase() as u8))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn byte(self) -> u8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_normalizes_case() {
        assert_eq!(Letter::parse("a"), Letter::parse("A"));
        assert_eq!(Letter::parse("z").unwrap().as_char(), 'Z');
    }

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(Letter::parse("  q\n").unwrap().as_char(), 'Q');
    }

    #[test]
    fn parse_rejects_everything_else() {
        assert!(Letter::parse("").is_none());
        assert!(Letter::parse("   ").is_none());
        assert!(Letter::parse("ab").is_none());
        assert!(Letter::parse("1").is_none());
        assert!(Letter::parse("?").is_none());
        assert!(Letter::parse("é").is_none());
        assert!(Letter::parse("a b").is_none());
    }

    #[test]
    fn display_is_uppercase_char() {
        let letter = Letter::from_char('k').unwrap();
        assert_eq!(letter.to_string(), "K");
        assert_eq!(letter.byte(), b'K');
    }
}
