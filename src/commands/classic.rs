//! Classic line mode
//!
//! Redraws the whole game after every guess and reads one line of input per guess.

use crate::core::{GameState, GameStatus, GuessOutcome};
use crate::output::{render_frame, render_prompt, render_reprompt, render_result};
use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Play a game to completion over line-based input and output
///
/// Returns the final status once the result has been printed.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if input ends before
/// the game is over.
pub fn run_classic<R: BufRead, W: Write>(
    game: &mut GameState,
    mut input: R,
    mut output: W,
) -> Result<GameStatus> {
    loop {
        render_frame(&mut output, game).context("failed to draw game")?;

        let status = game.status();
        if status.is_over() {
            render_result(&mut output, game).context("failed to print result")?;
            output.flush()?;
            info!(?status, guesses = game.guessed_letters().len(), "game over");
            return Ok(status);
        }

        read_guess(game, &mut input, &mut output)?;
    }
}

/// Prompt until the player enters a single character, then apply it
fn read_guess<R: BufRead, W: Write>(
    game: &mut GameState,
    input: &mut R,
    output: &mut W,
) -> Result<GuessOutcome> {
    let mut line = String::new();

    loop {
        render_prompt(output)?;

        line.clear();
        let read = input
            .read_line(&mut line)
            .context("failed to read guess")?;
        if read == 0 {
            bail!("input closed before the game finished");
        }

        match game.apply_guess(&line) {
            Ok(outcome) => {
                debug!(
                    ?outcome,
                    remaining_lives = game.remaining_lives(),
                    "guess applied"
                );
                return Ok(outcome);
            }
            Err(err) => {
                debug!(%err, "guess rejected");
                render_reprompt(output)?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TargetWord;
    use crate::output::display::{LOSS_MESSAGE, REPROMPT, WELCOME, WIN_MESSAGE};
    use std::io::Cursor;

    fn play(word: &str, lives: u8, input: &str) -> (GameState, Result<GameStatus>, String) {
        let mut game = GameState::with_lives(TargetWord::new(word).unwrap(), lives);
        let mut output = Vec::new();
        let result = run_classic(&mut game, Cursor::new(input), &mut output);
        (game, result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn classic_win() {
        let (game, result, text) = play("cat", 2, "c\na\nt\n");

        assert_eq!(result.unwrap(), GameStatus::Won);
        assert_eq!(game.remaining_lives(), 2);
        assert!(text.contains(WIN_MESSAGE));
        assert!(!text.contains(LOSS_MESSAGE));
        assert_eq!(text.matches(WELCOME).count(), 4);
    }

    #[test]
    fn classic_loss_reveals_word() {
        let (game, result, text) = play("cat", 2, "z\nx\n");

        assert_eq!(result.unwrap(), GameStatus::Lost);
        assert_eq!(game.guessed_letters(), &['z', 'x']);
        assert!(text.contains(LOSS_MESSAGE));
        assert!(text.contains("By the way, the word was 'cat'."));
    }

    #[test]
    fn classic_reprompts_on_long_input() {
        let (game, result, text) = play("cat", 2, "ab\n\nc\na\nt\n");

        assert_eq!(result.unwrap(), GameStatus::Won);
        assert_eq!(text.matches(REPROMPT).count(), 2);
        // Rejected lines never redraw the frame
        assert_eq!(text.matches(WELCOME).count(), 4);
        assert_eq!(game.guessed_letters(), &['c', 'a', 't']);
    }

    #[test]
    fn classic_repeat_guess_costs_nothing() {
        let (game, result, _) = play("cat", 2, "c\nc\na\nt\n");

        assert_eq!(result.unwrap(), GameStatus::Won);
        assert_eq!(game.remaining_lives(), 2);
        assert_eq!(game.guessed_letters(), &['c', 'a', 't']);
    }

    #[test]
    fn classic_stops_reading_after_game_over() {
        let (game, result, _) = play("cat", 1, "z\nc\na\nt\n");

        assert_eq!(result.unwrap(), GameStatus::Lost);
        assert_eq!(game.guessed_letters(), &['z']);
    }

    #[test]
    fn classic_input_closed_is_an_error() {
        let (game, result, _) = play("cat", 3, "c\n");

        let err = result.unwrap_err();
        assert!(err.to_string().contains("input closed"));
        assert_eq!(game.status(), GameStatus::InProgress);
    }
}
