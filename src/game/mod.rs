//! Hangman game logic: the game state machine, its pure reducer, the word
//! vocabulary and session statistics.

mod reducer;
mod state;
mod stats;
mod vocabulary;

pub use reducer::{Action, reduce};
pub use state::{GameState, GuessError, MAX_ATTEMPTS, Status};
pub use stats::SessionStats;
pub use vocabulary::{Vocabulary, VocabularyError};
