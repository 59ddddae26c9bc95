use super::Vocabulary;
use crate::core::{Letter, Word};
use rand::Rng;
use tracing::{debug, info};

/// Wrong guesses allowed before the game is lost
pub const MAX_ATTEMPTS: u8 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Playing,
    Won,
    Lost,
}

/// Why a guess was refused. The state is left unchanged in every case.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GuessError {
    #[error("Type a single letter")]
    InvalidInput,
    #[error("You already tried {0}!")]
    AlreadyGuessed(Letter),
    #[error("The game is over, start a new one")]
    GameOver,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    word: Word,
    guessed: Vec<Letter>,
    wrong_count: u8,
    status: Status,
}

impl GameState {
    /// Fresh game for a known word
    #[must_use]
    pub const fn new(word: Word) -> Self {
        Self {
            word,
            guessed: Vec::new(),
            wrong_count: 0,
            status: Status::Playing,
        }
    }

    /// Start a game with a word drawn uniformly from the vocabulary
    pub fn start<R: Rng + ?Sized>(vocabulary: &Vocabulary, rng: &mut R) -> Self {
        let word = vocabulary.choose(rng).clone();
        info!(length = word.len(), "New game started");
        Self::new(word)
    }

    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    /// Letters in the order they were guessed
    #[must_use]
    pub fn guessed(&self) -> &[Letter] {
        &self.guessed
    }

    #[must_use]
    pub const fn wrong_count(&self) -> u8 {
        self.wrong_count
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Check if game is over
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.status != Status::Playing
    }

    #[must_use]
    pub const fn remaining_attempts(&self) -> u8 {
        MAX_ATTEMPTS.saturating_sub(self.wrong_count)
    }

    /// Word with unguessed letters masked, e.g. `N _ D _`
    #[must_use]
    pub fn masked_word(&self) -> String {
        self.word.masked(&self.guessed)
    }

    /// Guessed letters that are in the word
    #[must_use]
    pub fn correct_letters(&self) -> Vec<Letter> {
        self.guessed
            .iter()
            .copied()
            .filter(|&l| self.word.has_letter(l))
            .collect()
    }

    /// Guessed letters that are not in the word
    #[must_use]
    pub fn wrong_letters(&self) -> Vec<Letter> {
        self.guessed
            .iter()
            .copied()
            .filter(|&l| !self.word.has_letter(l))
            .collect()
    }

    /// Guess from raw player input and return the next state
    ///
    /// # Errors
    ///
    /// - `GuessError::GameOver` if the game is already won or lost
    /// - `GuessError::InvalidInput` unless the input is one letter
    /// - `GuessError::AlreadyGuessed` if the letter was tried before
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Word;
    /// use hangman::game::{GameState, Status};
    ///
    /// let state = GameState::new(Word::new("API").unwrap());
    /// let state = state.guess("a").unwrap();
    /// assert_eq!(state.masked_word(), "A _ _");
    /// assert_eq!(state.status(), Status::Playing);
    /// ```
    pub fn guess(&self, input: &str) -> Result<Self, GuessError> {
        if self.is_terminal() {
            return Err(GuessError::GameOver);
        }

        let letter = Letter::parse(input).ok_or(GuessError::InvalidInput)?;
        self.guess_letter(letter)
    }

    /// Guess an already parsed letter and return the next state
    ///
    /// # Errors
    ///
    /// Same as [`GameState::guess`], minus input validation.
    pub fn guess_letter(&self, letter: Letter) -> Result<Self, GuessError> {
        if self.is_terminal() {
            return Err(GuessError::GameOver);
        }

        if self.guessed.contains(&letter) {
            return Err(GuessError::AlreadyGuessed(letter));
        }

        let mut next = self.clone();
        next.guessed.push(letter);

        let hit = next.word.has_letter(letter);
        if !hit {
            next.wrong_count += 1;
        }

        next.status = derive_status(&next.word, &next.guessed, next.wrong_count);
        debug!(%letter, hit, wrong = next.wrong_count, "Guess accepted");

        if next.is_terminal() {
            info!(status = ?next.status, word = %next.word, "Game finished");
        }

        Ok(next)
    }
}

fn derive_status(word: &Word, guessed: &[Letter], wrong_count: u8) -> Status {
    if word.is_revealed_by(guessed) {
        Status::Won
    } else if wrong_count >= MAX_ATTEMPTS {
        Status::Lost
    } else {
        Status::Playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(word: &str) -> GameState {
        GameState::new(Word::new(word).unwrap())
    }

    fn play(mut state: GameState, guesses: &str) -> GameState {
        for c in guesses.chars() {
            state = state.guess(&c.to_string()).unwrap();
        }
        state
    }

    #[test]
    fn test_initial_state() {
        let state = game("NODE");
        assert_eq!(state.status(), Status::Playing);
        assert_eq!(state.wrong_count(), 0);
        assert_eq!(state.remaining_attempts(), MAX_ATTEMPTS);
        assert!(state.guessed().is_empty());
        assert_eq!(state.masked_word(), "_ _ _ _");
    }

    #[test]
    fn test_win_without_mistakes() {
        let state = play(game("NODE"), "NODE");
        assert_eq!(state.status(), Status::Won);
        assert_eq!(state.wrong_count(), 0);
        assert_eq!(state.masked_word(), "N O D E");
    }

    #[test]
    fn test_loss_after_six_misses() {
        let state = play(game("API"), "XYZWQR");
        assert_eq!(state.wrong_count(), 6);
        assert_eq!(state.remaining_attempts(), 0);
        assert_eq!(state.status(), Status::Lost);
    }

    #[test]
    fn test_lost_one_miss_earlier_is_still_playing() {
        let state = play(game("API"), "XYZWQ");
        assert_eq!(state.status(), Status::Playing);
        assert_eq!(state.remaining_attempts(), 1);
    }

    #[test]
    fn test_win_on_last_chance() {
        let state = play(game("API"), "XYZWQAP");
        assert_eq!(state.wrong_count(), 5);
        assert_eq!(state.status(), Status::Playing);

        let state = state.guess("i").unwrap();
        assert_eq!(state.status(), Status::Won);
    }

    #[test]
    fn test_valid_guess_adds_exactly_one_letter() {
        let state = game("REACT");
        let next = state.guess("e").unwrap();
        assert_eq!(next.guessed().len(), state.guessed().len() + 1);
        assert_eq!(next.guessed()[0].as_char(), 'E');
    }

    #[test]
    fn test_wrong_count_only_moves_on_miss() {
        let state = game("REACT");
        let hit = state.guess("r").unwrap();
        assert_eq!(hit.wrong_count(), 0);

        let miss = hit.guess("z").unwrap();
        assert_eq!(miss.wrong_count(), 1);
    }

    #[test]
    fn test_repeated_guess_is_rejected() {
        let state = play(game("REACT"), "RZ");
        assert_eq!(
            state.guess("r"),
            Err(GuessError::AlreadyGuessed(Letter::from_char('R').unwrap()))
        );
        // Case normalization applies before the duplicate check
        assert_eq!(
            state.guess("Z"),
            Err(GuessError::AlreadyGuessed(Letter::from_char('Z').unwrap()))
        );
        assert_eq!(state.wrong_count(), 1);
        assert_eq!(state.guessed().len(), 2);
    }

    #[test]
    fn test_invalid_input_is_rejected() {
        let state = game("REACT");
        for input in ["", " ", "ab", "1", "!", "ç"] {
            assert_eq!(state.guess(input), Err(GuessError::InvalidInput), "{input:?}");
        }
    }

    #[test]
    fn test_terminal_states_refuse_guesses() {
        let won = play(game("IOS"), "IOS");
        assert_eq!(won.guess("a"), Err(GuessError::GameOver));
        // Game over wins over input validation
        assert_eq!(won.guess("??"), Err(GuessError::GameOver));

        let lost = play(game("IOS"), "ABCDEF");
        assert_eq!(lost.guess("i"), Err(GuessError::GameOver));
        assert_eq!(lost.wrong_count(), MAX_ATTEMPTS);
    }

    #[test]
    fn test_correct_and_wrong_letters_keep_guess_order() {
        let state = play(game("HOOKS"), "ZOXH");
        let correct: String = state.correct_letters().iter().map(|l| l.as_char()).collect();
        let wrong: String = state.wrong_letters().iter().map(|l| l.as_char()).collect();
        assert_eq!(correct, "OH");
        assert_eq!(wrong, "ZX");
    }

    #[test]
    fn test_guess_does_not_touch_previous_state() {
        let state = game("CRUD");
        let _ = state.guess("c").unwrap();
        assert!(state.guessed().is_empty());
    }

    #[test]
    fn test_start_picks_from_vocabulary() {
        use rand::SeedableRng;
        use rand::rngs::StdRng;

        let vocabulary = Vocabulary::embedded();
        let mut rng = StdRng::seed_from_u64(42);
        let state = GameState::start(&vocabulary, &mut rng);

        assert!(vocabulary.words().contains(state.word()));
        assert_eq!(state.status(), Status::Playing);
        assert!(state.guessed().is_empty());
    }
}
