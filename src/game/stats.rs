use super::{GameState, Status};

/// Win/loss tally for the running process
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    pub games_played: usize,
    pub games_won: usize,
}

impl SessionStats {
    /// Count a finished game. Games still in progress are ignored.
    pub fn record(&mut self, state: &GameState) {
        match state.status() {
            Status::Won => {
                self.games_played += 1;
                self.games_won += 1;
            }
            Status::Lost => self.games_played += 1,
            Status::Playing => {}
        }
    }

    /// Win rate in percent, 0 before any game finished
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn finish(word: &str, guesses: &str) -> GameState {
        guesses
            .chars()
            .fold(GameState::new(Word::new(word).unwrap()), |s, c| {
                s.guess(&c.to_string()).unwrap()
            })
    }

    #[test]
    fn records_only_finished_games() {
        let mut stats = SessionStats::default();
        stats.record(&finish("API", "A"));
        assert_eq!(stats, SessionStats::default());

        stats.record(&finish("API", "API"));
        stats.record(&finish("API", "BCDEFG"));
        assert_eq!(stats.games_played, 2);
        assert_eq!(stats.games_won, 1);
        assert!((stats.win_rate() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn win_rate_starts_at_zero() {
        assert!(SessionStats::default().win_rate().abs() < f64::EPSILON);
    }
}
