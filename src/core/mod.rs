//! Core domain types for hangman
//!
//! Validated letters and words. Everything here is pure and has no I/O.

mod letter;
mod word;

pub use letter::Letter;
pub use word::{Word, WordError};
