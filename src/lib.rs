//! Hangman
//!
//! A terminal word-guessing game with a classic line mode and a full-screen TUI.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{GameState, GameStatus, TargetWord};
//!
//! let mut game = GameState::with_lives(TargetWord::new("cat").unwrap(), 2);
//!
//! for guess in ["c", "a", "t"] {
//!     game.apply_guess(guess).unwrap();
//! }
//! assert_eq!(game.status(), GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
