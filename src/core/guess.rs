//! Guess validation and outcomes
//!
//! A guess is one line of raw player input. It is accepted when it names exactly one
//! character once the line terminator (and, failing that, any trailing whitespace) is
//! removed.

use thiserror::Error;

/// Result of applying an accepted guess to a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// New letter that occurs in the target word
    Hit,
    /// New letter that does not occur in the target word; one life lost
    Miss,
    /// Letter was guessed before; nothing changed
    AlreadyGuessed,
    /// Game is already over; nothing changed
    Ignored,
}

impl GuessOutcome {
    /// Whether the guess mutated the game state
    #[inline]
    #[must_use]
    pub const fn changed_state(self) -> bool {
        matches!(self, Self::Hit | Self::Miss)
    }
}

/// Error type for rejected guesses
///
/// Rejection never changes the game; the caller is expected to prompt again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("expected a single letter, got {length} characters")]
    MultiCharacterGuess { length: usize },
}

/// Extract the guessed character from one line of raw input
///
/// A lone whitespace character such as `" "` is a valid guess; `"a  "` is read as `'a'`.
///
/// # Errors
/// Returns `GuessError::MultiCharacterGuess` when the input holds zero or more than one
/// character.
///
/// # Examples
/// ```
/// use hangman::core::{parse_guess, GuessError};
///
/// assert_eq!(parse_guess("a\n"), Ok('a'));
/// assert_eq!(
///     parse_guess("ab"),
///     Err(GuessError::MultiCharacterGuess { length: 2 })
/// );
/// ```
pub fn parse_guess(input: &str) -> Result<char, GuessError> {
    let line = input.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_end();

    single_char(line)
        .or_else(|| single_char(trimmed))
        .ok_or(GuessError::MultiCharacterGuess {
            length: trimmed.chars().count(),
        })
}

fn single_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
