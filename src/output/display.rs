//! Display functions for the line-based game

use super::formatters::{attempts_bar, letters_line};
use super::gallows;
use crate::game::{GameState, MAX_ATTEMPTS, SessionStats, Status};
use colored::Colorize;
use std::io::{self, Write};

/// Print the gallows, the masked word and the letters used so far
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn print_board<W: Write>(out: &mut W, state: &GameState) -> io::Result<()> {
    writeln!(out)?;
    for line in gallows::render(state.wrong_count()) {
        writeln!(out, "   {line}")?;
    }

    writeln!(out, "\n   Word:    {}", state.masked_word().bright_white().bold())?;
    writeln!(
        out,
        "   Correct: {}",
        letters_line(&state.correct_letters()).green()
    )?;
    writeln!(
        out,
        "   Wrong:   {}",
        letters_line(&state.wrong_letters()).red()
    )?;
    writeln!(
        out,
        "   Attempts left: [{}] {}\n",
        attempts_bar(state.remaining_attempts(), MAX_ATTEMPTS).yellow(),
        state.remaining_attempts()
    )?;
    Ok(())
}

/// Print the win/loss banner with the revealed word and session tally
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn print_game_over<W: Write>(
    out: &mut W,
    state: &GameState,
    stats: &SessionStats,
) -> io::Result<()> {
    writeln!(out, "{}", "═".repeat(50).bright_cyan())?;
    match state.status() {
        Status::Won => writeln!(
            out,
            "{}",
            "   🎉 Congratulations! You won! 🎉".bright_green().bold()
        )?,
        Status::Lost => writeln!(out, "{}", "   💀 You lost!".red().bold())?,
        Status::Playing => {}
    }
    writeln!(
        out,
        "   The word was: {}",
        state.word().text().bright_yellow().bold()
    )?;
    writeln!(
        out,
        "   Games: {} | Won: {} | Win rate: {:.0}%",
        stats.games_played,
        stats.games_won,
        stats.win_rate()
    )?;
    writeln!(out, "{}", "═".repeat(50).bright_cyan())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn board_shows_progress() {
        let state = GameState::new(Word::new("NODE").unwrap())
            .guess("n")
            .unwrap()
            .guess("x")
            .unwrap();
        let text = render(|out| print_board(out, &state));

        assert!(text.contains("N _ _ _"));
        assert!(text.contains("Correct: "));
        assert!(text.contains('X'));
        assert!(text.contains("] 5"));
        assert!(text.contains("  O   |"));
    }

    #[test]
    fn game_over_reveals_word() {
        let state = "BCDFGH"
            .chars()
            .fold(GameState::new(Word::new("API").unwrap()), |s, c| {
                s.guess(&c.to_string()).unwrap()
            });
        let mut stats = SessionStats::default();
        stats.record(&state);

        let text = render(|out| print_game_over(out, &state, &stats));
        assert!(text.contains("You lost!"));
        assert!(text.contains("API"));
        assert!(text.contains("Games: 1 | Won: 0"));
    }
}
