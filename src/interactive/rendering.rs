//! TUI rendering with ratatui
//!
//! Gallows, word and lives panels for the hangman interface.

use super::app::{App, MessageStyle};
use crate::core::{GameStatus, PLACEHOLDER};
use crate::output::formatters::{lives_bar, spaced};
use crate::output::gallows::figure;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // Gallows
            Constraint::Percentage(60), // Word and messages
        ])
        .split(chunks[1]);

    render_gallows(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("HANGMAN")
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

fn render_gallows(f: &mut Frame, app: &App, area: Rect) {
    let color = match app.game.status() {
        GameStatus::Lost => Color::Red,
        GameStatus::Won => Color::Green,
        GameStatus::InProgress => Color::White,
    };

    let lines: Vec<Line> = figure(app.game.drawing_stage())
        .iter()
        .map(|row| Line::from(*row))
        .collect();

    let title = format!(
        " {} ",
        lives_bar(app.game.remaining_lives(), app.game.max_lives())
    );
    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );

    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Word
            Constraint::Length(3), // Guessed letters
            Constraint::Length(3), // Lives gauge
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_word(f, app, chunks[0]);
    render_guessed(f, app, chunks[1]);
    render_lives(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
}

fn render_word(f: &mut Frame, app: &App, area: Rect) {
    // Reveal the whole word once the player has lost
    let spans: Vec<Span> = if app.game.status() == GameStatus::Lost {
        let masked = app.game.masked_word();
        app.game
            .target()
            .chars()
            .iter()
            .zip(masked)
            .map(|(&actual, shown)| {
                let style = if shown == PLACEHOLDER {
                    Style::default().fg(Color::Red)
                } else {
                    Style::default().fg(Color::Yellow)
                };
                Span::styled(format!("{actual} "), style)
            })
            .collect()
    } else {
        vec![Span::styled(
            spaced(&app.game.masked_word()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )]
    };

    let paragraph = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double),
        );

    f.render_widget(paragraph, area);
}

fn render_guessed(f: &mut Frame, app: &App, area: Rect) {
    let target = app.game.target();
    let spans: Vec<Span> = app
        .game
        .guessed_letters()
        .iter()
        .map(|&letter| {
            let style = if target.has_letter(letter) {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Span::styled(format!("{letter} "), style)
        })
        .collect();

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(" Guessed ")
            .borders(Borders::ALL),
    );

    f.render_widget(paragraph, area);
}

fn render_lives(f: &mut Frame, app: &App, area: Rect) {
    let remaining = app.game.remaining_lives();
    let max = app.game.max_lives();
    let ratio = f64::from(remaining) / f64::from(max);

    let color = if ratio > 0.5 {
        Color::Green
    } else if ratio > 0.25 {
        Color::Yellow
    } else {
        Color::Red
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Lives ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("{remaining}/{max}"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
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

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help_text = if app.game.is_over() {
        "Any key: Exit"
    } else {
        "Type a letter to guess | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameState, TargetWord};
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(ratatui::buffer::Cell::symbol).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app(word: &str, lives: u8) -> App {
        App::new(GameState::with_lives(TargetWord::new(word).unwrap(), lives))
    }

    #[test]
    fn draws_masked_word_and_guesses() {
        let mut app = app("balloons", 11);
        app.handle_guess('l');
        app.handle_guess('z');

        let screen = draw(&app);
        assert!(screen.contains("HANGMAN"));
        assert!(screen.contains("_ _ l l _ _ _ _"));
        assert!(screen.contains("l z"));
        assert!(screen.contains("10/11"));
    }

    #[test]
    fn draws_full_figure_on_loss() {
        let mut app = app("cat", 1);
        app.handle_guess('z');

        let screen = draw(&app);
        assert!(screen.contains("|   / \\"));
        assert!(screen.contains("c a t"));
        assert!(screen.contains("Any key: Exit"));
    }

    #[test]
    fn draws_empty_gallows_at_start() {
        let app = app("cat", 11);

        let screen = draw(&app);
        assert!(!screen.contains("-------"));
        assert!(screen.contains("_ _ _"));
        assert!(screen.contains("Esc: Quit"));
    }
}
