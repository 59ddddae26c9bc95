//! Simple interactive CLI mode
//!
//! Line-based hangman without the TUI. Reads one guess per line.

use crate::game::{Action, GameState, GuessError, SessionStats, Vocabulary, reduce};
use crate::output::{print_board, print_game_over};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};
use tracing::info;

/// Run the simple interactive CLI mode
///
/// Returns the session tally once the player quits or input ends.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R, I, W>(
    vocabulary: &Vocabulary,
    rng: &mut R,
    input: &mut I,
    out: &mut W,
) -> Result<SessionStats>
where
    R: Rng + ?Sized,
    I: BufRead,
    W: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════════════╗")?;
    writeln!(out, "║                  H A N G M A N               ║")?;
    writeln!(out, "╚══════════════════════════════════════════════╝\n")?;
    writeln!(out, "Guess the word one letter at a time.")?;
    writeln!(out, "Commands: 'new' for a new game, 'quit' to exit\n")?;

    let mut stats = SessionStats::default();
    let mut state = GameState::start(vocabulary, rng);

    loop {
        print_board(out, &state)?;

        let Some(line) = read_line(input, out, "Guess a letter")? else {
            break;
        };

        match line.to_lowercase().as_str() {
            "quit" | "exit" => break,
            "new" => {
                state = new_game(&state, vocabulary, rng)?;
                writeln!(out, "\n🔄 New game started!")?;
                continue;
            }
            _ => {}
        }

        match reduce(&state, Action::Guess(line)) {
            Ok(next) => {
                if next.wrong_count() > state.wrong_count() {
                    writeln!(out, "{}", "✗ Not in the word".red())?;
                } else {
                    writeln!(out, "{}", "✓ Good guess".green())?;
                }
                state = next;
            }
            Err(err) => writeln!(out, "{}", format!("❌ {err}").yellow())?,
        }

        if state.is_terminal() {
            stats.record(&state);
            print_board(out, &state)?;
            print_game_over(out, &state, &stats)?;

            match read_line(input, out, "Play again? (yes/no)")? {
                Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {
                    state = new_game(&state, vocabulary, rng)?;
                    writeln!(out, "\n🔄 New game started!")?;
                }
                _ => break,
            }
        }
    }

    info!(
        played = stats.games_played,
        won = stats.games_won,
        "Simple session ended"
    );
    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(stats)
}

fn new_game<R: Rng + ?Sized>(
    state: &GameState,
    vocabulary: &Vocabulary,
    rng: &mut R,
) -> Result<GameState, GuessError> {
    let word = vocabulary.choose(rng).clone();
    reduce(state, Action::NewGame(word))
}

/// Prompt and read one trimmed line, `None` at end of input
fn read_line<I: BufRead, W: Write>(
    input: &mut I,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
