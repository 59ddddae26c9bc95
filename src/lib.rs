//! Hangman
//!
//! A terminal hangman game built around a pure, deterministic game core.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::Word;
//! use hangman::game::{Action, GameState, Status, reduce};
//!
//! let mut state = GameState::new(Word::new("node").unwrap());
//! for letter in ["n", "o", "d", "e"] {
//!     state = reduce(&state, Action::Guess(letter.to_string())).unwrap();
//! }
//! assert_eq!(state.status(), Status::Won);
//! ```

// Core domain types
pub mod core;

// Game state machine and vocabulary
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
