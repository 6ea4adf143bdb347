//! Frame and result printing for the classic line mode

use super::formatters::spaced;
use super::gallows::figure;
use crate::core::{GameState, GameStatus};
use colored::Colorize;
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

pub const WELCOME: &str = "Welcome to hangman, good luck!";
pub const PROMPT: &str = "Guess a letter: ";
pub const REPROMPT: &str = "Just guess a single letter please";
pub const WIN_MESSAGE: &str = "You win, well done!";
pub const LOSS_MESSAGE: &str = "Unlucky - you hanged.";

/// Clear the screen and draw the current game
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn render_frame<W: Write>(out: &mut W, game: &GameState) -> io::Result<()> {
    queue!(out, MoveTo(0, 0), Clear(ClearType::FromCursorDown))?;

    writeln!(out)?;
    writeln!(out, "{}", WELCOME.bright_cyan().bold())?;
    writeln!(out)?;

    for row in figure(game.drawing_stage()) {
        writeln!(out, "{row}")?;
    }

    writeln!(out)?;
    writeln!(out, "    WORD: {}", spaced(&game.masked_word()))?;
    writeln!(out)?;
    writeln!(
        out,
        "Letters guessed so far: {}",
        spaced(game.guessed_letters())
    )?;

    Ok(())
}

/// Print the final result, revealing the word on a loss
///
/// Prints nothing while the game is still in progress.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn render_result<W: Write>(out: &mut W, game: &GameState) -> io::Result<()> {
    match game.status() {
        GameStatus::InProgress => {}
        GameStatus::Won => {
            writeln!(out)?;
            writeln!(out, "{}", WIN_MESSAGE.green().bold())?;
        }
        GameStatus::Lost => {
            writeln!(out)?;
            writeln!(out, "{}", LOSS_MESSAGE.red().bold())?;
            writeln!(out)?;
            writeln!(out, "By the way, the word was '{}'.", game.target())?;
        }
    }

    Ok(())
}

/// Ask for the next guess
///
/// # Errors
///
/// Returns an error if writing to or flushing `out` fails.
pub fn render_prompt<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    write!(out, "{PROMPT}")?;
    out.flush()
}

/// Tell the player their last input was not a single letter
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn render_reprompt<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", REPROMPT.yellow())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TargetWord;

    fn rendered(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn game(word: &str, lives: u8) -> GameState {
        GameState::with_lives(TargetWord::new(word).unwrap(), lives)
    }

    #[test]
    fn frame_shows_banner_word_and_guesses() {
        let mut game = game("balloons", 11);
        game.apply_guess("l").unwrap();
        game.apply_guess("z").unwrap();

        let text = rendered(|out| render_frame(out, &game));
        assert!(text.contains(WELCOME));
        assert!(text.contains("    WORD: _ _ l l _ _ _ _"));
        assert!(text.contains("Letters guessed so far: l z"));
    }

    #[test]
    fn frame_draws_figure_for_stage() {
        let game = game("cat", 5);

        let text = rendered(|out| render_frame(out, &game));
        for row in figure(5) {
            assert!(text.contains(row));
        }
        assert!(text.contains("          |    O"));
    }

    #[test]
    fn frame_starts_with_screen_clear() {
        let game = game("cat", 3);

        let text = rendered(|out| render_frame(out, &game));
        assert!(text.starts_with('\u{1b}'));
    }

    #[test]
    fn result_for_win() {
        let mut game = game("cat", 2);
        for letter in ["c", "a", "t"] {
            game.apply_guess(letter).unwrap();
        }

        let text = rendered(|out| render_result(out, &game));
        assert!(text.contains(WIN_MESSAGE));
        assert!(!text.contains("the word was"));
    }

    #[test]
    fn result_for_loss_reveals_word() {
        let mut game = game("cat", 2);
        game.apply_guess("z").unwrap();
        game.apply_guess("x").unwrap();

        let text = rendered(|out| render_result(out, &game));
        assert!(text.contains(LOSS_MESSAGE));
        assert!(text.contains("By the way, the word was 'cat'."));
    }

    #[test]
    fn result_empty_while_in_progress() {
        let game = game("cat", 2);
        assert_eq!(rendered(|out| render_result(out, &game)), "");
    }

    #[test]
    fn prompt_text() {
        let text = rendered(|out| render_prompt(out));
        assert_eq!(text, format!("\n{PROMPT}"));
    }
}
