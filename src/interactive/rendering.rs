//! TUI rendering with ratatui
//!
//! Gallows, word and letter panels for the hangman screen.

use super::app::{App, InputMode, MessageStyle};
use crate::core::Letter;
use crate::game::{MAX_ATTEMPTS, Status};
use crate::output::gallows;
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<R: Rng>(f: &mut Frame, app: &App<'_, R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35), // Gallows
            Constraint::Percentage(65), // Word, letters, messages
        ])
        .split(chunks[1]);

    render_gallows(f, app, main_chunks[0]);
    render_word_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪢 HANGMAN")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_gallows<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let color = match app.state.status() {
        Status::Playing => Color::White,
        Status::Won => Color::Green,
        Status::Lost => Color::Red,
    };

    let lines: Vec<Line> = gallows::render(app.state.wrong_count())
        .into_iter()
        .map(Line::from)
        .collect();

    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Gallows ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_word_panel<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Word
            Constraint::Length(4), // Letters used
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_word(f, app, chunks[0]);
    render_letters(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_word<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let mut content = vec![Line::from(Span::styled(
        app.state.masked_word(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))];

    if app.state.is_terminal() {
        content.push(Line::from(vec![
            Span::raw("The word was: "),
            Span::styled(
                app.state.word().text().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn letter_spans(letters: &[Letter], color: Color) -> Vec<Span<'static>> {
    letters
        .iter()
        .map(|l| {
            Span::styled(
                format!(" {l} "),
                Style::default()
                    .fg(Color::White)
                    .bg(color)
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect()
}

fn render_letters<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let mut correct = vec![Span::raw("Correct: ")];
    correct.extend(letter_spans(&app.state.correct_letters(), Color::Green));

    let mut wrong = vec![Span::raw("Wrong:   ")];
    wrong.extend(letter_spans(&app.state.wrong_letters(), Color::Red));

    let paragraph = Paragraph::new(vec![Line::from(correct), Line::from(wrong)]).block(
        Block::default()
            .title(" Letters Used ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_messages<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let (title, content, color) = match app.input_mode() {
        InputMode::GameOver => match app.state.status() {
            Status::Won => (
                " 🎉 CONGRATULATIONS! 🎉 | Press 'n' for new game or 'q' to quit ",
                "",
                Color::Green,
            ),
            _ => (
                " 💀 GAME OVER | Press 'n' for new game or 'q' to quit ",
                "",
                Color::Red,
            ),
        },
        InputMode::Guessing => (
            " Type a letter and press Enter ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(25),
            Constraint::Percentage(35),
        ])
        .split(area);

    let remaining = app.state.remaining_attempts();
    let percent = u16::from(remaining) * 100 / u16::from(MAX_ATTEMPTS);
    let gauge_color = match remaining {
        0..=1 => Color::Red,
        2..=3 => Color::Yellow,
        _ => Color::Green,
    };
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(gauge_color))
        .percent(percent)
        .label(format!("Attempts left: {remaining}/{MAX_ATTEMPTS}"));
    f.render_widget(gauge, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.games_played,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = match app.input_mode() {
        InputMode::GameOver => "n: New Game | q: Quit",
        InputMode::Guessing => "Enter: Guess | Ctrl+N: New Game | Esc: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::Vocabulary;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(app: &App<'_, StdRng>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn shows_masked_word_and_attempts() {
        let vocabulary = Vocabulary::new(vec![Word::new("NODE").unwrap()]).unwrap();
        let mut app = App::new(&vocabulary, StdRng::seed_from_u64(5));
        app.input_buffer.push('o');
        app.submit_guess();

        let text = screen(&app);
        assert!(text.contains("_ O _ _"));
        assert!(text.contains("Attempts left: 6/6"));
        assert!(text.contains("Letters Used"));
    }

    #[test]
    fn shows_figure_and_reveal_after_loss() {
        let vocabulary = Vocabulary::new(vec![Word::new("API").unwrap()]).unwrap();
        let mut app = App::new(&vocabulary, StdRng::seed_from_u64(5));
        for c in "XYZWQR".chars() {
            app.input_buffer.push(c);
            app.submit_guess();
        }

        let text = screen(&app);
        assert!(text.contains("The word was: API"));
        assert!(text.contains("/|\\"));
        assert!(text.contains("Attempts left: 0/6"));
        assert!(text.contains("GAME OVER"));
    }
}
