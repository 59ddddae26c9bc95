//! Terminal output formatting
//!
//! Gallows drawing and display utilities shared by both front ends.

pub mod display;
pub mod formatters;
pub mod gallows;

pub use display::{print_board, print_game_over};
