//! Pure state transitions
//!
//! Front ends never mutate a [`GameState`] in place. They build an [`Action`],
//! hand it to [`reduce`] together with the current state, and keep whatever
//! comes back. A rejected action leaves the caller holding the old state.

use super::{GameState, GuessError};
use crate::core::Word;
use tracing::debug;

/// Something the player asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the game wholesale. The word is chosen by the caller so the
    /// transition stays deterministic.
    NewGame(Word),
    /// Raw guess input, validated by the reducer
    Guess(String),
}

/// Apply an action to a state
///
/// # Errors
///
/// Propagates [`GuessError`] from guesses; the input state is never modified.
///
/// # Examples
/// ```
/// use hangman::core::Word;
/// use hangman::game::{Action, GameState, GuessError, reduce};
///
/// let state = GameState::new(Word::new("JSON").unwrap());
/// let state = reduce(&state, Action::Guess("j".into())).unwrap();
/// assert_eq!(
///     reduce(&state, Action::Guess("J".into())),
///     Err(GuessError::AlreadyGuessed(state.guessed()[0]))
/// );
/// ```
pub fn reduce(state: &GameState, action: Action) -> Result<GameState, GuessError> {
    match action {
        Action::NewGame(word) => Ok(GameState::new(word)),
        Action::Guess(input) => state.guess(&input).inspect_err(|err| {
            debug!(input = %input, error = %err, "Guess rejected");
        }),
    }
}
