//! Core domain types for hangman
//!
//! This module contains the game rules with no I/O.
//! All types here are pure and testable in isolation from any terminal.

mod game;
mod guess;
mod word;

pub use game::{GameState, GameStatus, MAX_LIVES, PLACEHOLDER};
pub use guess::{GuessError, GuessOutcome, parse_guess};
pub use word::{TargetWord, WordError};
