//! TUI application state and logic

use crate::core::{GameState, GameStatus, GuessOutcome};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, info};

/// Application state
pub struct App {
    pub game: GameState,
    pub messages: Vec<Message>,
    pub should_quit: bool,
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

impl App {
    #[must_use]
    pub fn new(game: GameState) -> Self {
        Self {
            game,
            messages: vec![Message {
                text: "Welcome to hangman, good luck! Type a letter to guess.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            _ if self.game.is_over() => {
                self.should_quit = true;
            }
            KeyCode::Char(c) => self.handle_guess(c),
            _ => {}
        }
    }

    pub fn handle_guess(&mut self, letter: char) {
        let outcome = self.game.guess_letter(letter);
        debug!(
            ?outcome,
            remaining_lives = self.game.remaining_lives(),
            "guess applied"
        );

        match outcome {
            GuessOutcome::Hit => {
                self.add_message(&format!("'{letter}' is in the word!"), MessageStyle::Success);
            }
            GuessOutcome::Miss => {
                self.add_message(
                    &format!("No '{letter}' - {} lives left", self.game.remaining_lives()),
                    MessageStyle::Error,
                );
            }
            GuessOutcome::AlreadyGuessed => {
                self.add_message(
                    &format!("You already guessed '{letter}'"),
                    MessageStyle::Info,
                );
            }
            GuessOutcome::Ignored => {}
        }

        match self.game.status() {
            GameStatus::InProgress => {}
            GameStatus::Won => {
                info!(status = ?GameStatus::Won, "game over");
                self.add_message("You win, well done!", MessageStyle::Success);
                self.add_message("Press any key to exit.", MessageStyle::Info);
            }
            GameStatus::Lost => {
                info!(status = ?GameStatus::Lost, "game over");
                self.add_message(
                    &format!("Unlucky - you hanged. The word was '{}'.", self.game.target()),
                    MessageStyle::Error,
                );
                self.add_message("Press any key to exit.", MessageStyle::Info);
            }
        }
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
}

/// Run the TUI application
///
/// Returns the game as it stood when the player left.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<GameState> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    info!("tui started");

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    info!("tui stopped");

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<GameState> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.game)
}
