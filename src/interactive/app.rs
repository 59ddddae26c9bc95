//! TUI application state and logic

use crate::game::{Action, GameState, SessionStats, Status, Vocabulary, reduce};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use rand::Rng;
use std::io;
use tracing::info;

/// Application state
pub struct App<'a, R: Rng> {
    pub vocabulary: &'a Vocabulary,
    pub state: GameState,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: SessionStats,
    pub should_quit: bool,
    rng: R,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a, R: Rng> App<'a, R> {
    /// Create the app and start the first game
    pub fn new(vocabulary: &'a Vocabulary, mut rng: R) -> Self {
        let state = GameState::start(vocabulary, &mut rng);

        Self {
            vocabulary,
            state,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! Guess the word one letter at a time.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type a letter and press Enter. Ctrl+N starts a new game.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: SessionStats::default(),
            should_quit: false,
            rng,
        }
    }

    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        if self.state.is_terminal() {
            InputMode::GameOver
        } else {
            InputMode::Guessing
        }
    }

    /// Run an action through the reducer and report the outcome
    pub fn dispatch(&mut self, action: Action) {
        match reduce(&self.state, action) {
            Ok(next) => {
                let previous = std::mem::replace(&mut self.state, next);
                self.report_transition(&previous);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn report_transition(&mut self, previous: &GameState) {
        // Only a guess grows the letter list; a reset shrinks it
        if self.state.guessed().len() <= previous.guessed().len() {
            return;
        }
        let Some(&letter) = self.state.guessed().last() else {
            return;
        };

        if self.state.wrong_count() > previous.wrong_count() {
            self.add_message(
                &format!(
                    "✗ {letter} is not in the word ({} attempts left)",
                    self.state.remaining_attempts()
                ),
                MessageStyle::Error,
            );
        } else {
            self.add_message(&format!("✓ {letter} is in the word"), MessageStyle::Success);
        }

        if self.state.is_terminal() {
            self.finish_game();
        }
    }

    fn finish_game(&mut self) {
        self.stats.record(&self.state);

        match self.state.status() {
            Status::Won => self.add_message("🎉 Congratulations! You won!", MessageStyle::Success),
            Status::Lost => self.add_message("💀 You lost!", MessageStyle::Error),
            Status::Playing => return,
        }
        let reveal = format!("The word was: {}", self.state.word());
        self.add_message(&reveal, MessageStyle::Info);
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn submit_guess(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        self.dispatch(Action::Guess(input));
    }

    pub fn new_game(&mut self) {
        let word = self.vocabulary.choose(&mut self.rng).clone();
        self.input_buffer.clear();
        self.messages.clear();
        self.dispatch(Action::NewGame(word));
        info!(
            played = self.stats.games_played,
            won = self.stats.games_won,
            "New game from TUI"
        );
        self.add_message("New game started! Guess a letter.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('n') if ctrl => {
                self.new_game();
                return;
            }
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            _ => {}
        }

        match self.input_mode() {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {
                    // Other keys do nothing until a new game starts
                }
            },
            InputMode::Guessing => match key.code {
                KeyCode::Char(c) => {
                    // Single-character field: typing replaces the pending letter
                    self.input_buffer.clear();
                    self.input_buffer.push(c);
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(app: App<'_, R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, R>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    info!(
        played = app.stats.games_played,
        won = app.stats.games_won,
        "TUI session ended"
    );
    Ok(())
}
