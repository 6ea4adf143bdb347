//! Hangman game state machine
//!
//! `GameState` owns the target word, the letters guessed so far and the remaining lives.
//! It is pure: every transition goes through [`GameState::apply_guess`] and nothing here
//! performs I/O.

use super::guess::{GuessError, GuessOutcome, parse_guess};
use super::word::TargetWord;
use rustc_hash::FxHashSet;

/// Starting lives, and the highest drawing stage
pub const MAX_LIVES: u8 = 11;

/// Token shown for a letter that has not been guessed yet
pub const PLACEHOLDER: char = '_';

/// Where a game currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// A single game of hangman
#[derive(Debug, Clone)]
pub struct GameState {
    target: TargetWord,
    // Guess order for display, set for membership
    guessed: Vec<char>,
    guessed_set: FxHashSet<char>,
    remaining_lives: u8,
    max_lives: u8,
}

impl GameState {
    /// Start a game with [`MAX_LIVES`] lives
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{GameState, TargetWord, MAX_LIVES};
    ///
    /// let game = GameState::new(TargetWord::new("cat").unwrap());
    /// assert_eq!(game.remaining_lives(), MAX_LIVES);
    /// assert!(!game.is_over());
    /// ```
    #[must_use]
    pub fn new(target: TargetWord) -> Self {
        Self::with_lives(target, MAX_LIVES)
    }

    /// Start a game with a custom number of lives
    ///
    /// `lives` is clamped to `1..=MAX_LIVES` so the drawing stage always has a figure.
    #[must_use]
    pub fn with_lives(target: TargetWord, lives: u8) -> Self {
        let lives = lives.clamp(1, MAX_LIVES);

        Self {
            target,
            guessed: Vec::new(),
            guessed_set: FxHashSet::default(),
            remaining_lives: lives,
            max_lives: lives,
        }
    }

    /// Apply one line of raw player input
    ///
    /// # Errors
    /// Returns `GuessError::MultiCharacterGuess` if the input is not exactly one character.
    /// The game is left untouched and the caller should prompt again.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{GameState, GuessOutcome, TargetWord};
    ///
    /// let mut game = GameState::with_lives(TargetWord::new("cat").unwrap(), 2);
    ///
    /// assert_eq!(game.apply_guess("z"), Ok(GuessOutcome::Miss));
    /// assert_eq!(game.remaining_lives(), 1);
    /// assert_eq!(game.apply_guess("c"), Ok(GuessOutcome::Hit));
    /// assert_eq!(game.apply_guess("c"), Ok(GuessOutcome::AlreadyGuessed));
    /// assert!(game.apply_guess("ab").is_err());
    /// ```
    pub fn apply_guess(&mut self, input: &str) -> Result<GuessOutcome, GuessError> {
        if self.is_over() {
            return Ok(GuessOutcome::Ignored);
        }

        let letter = parse_guess(input)?;
        Ok(self.guess_letter(letter))
    }

    /// Apply an already-validated single character
    ///
    /// Used by front ends that read one key at a time.
    pub fn guess_letter(&mut self, letter: char) -> GuessOutcome {
        if self.is_over() {
            return GuessOutcome::Ignored;
        }

        if !self.guessed_set.insert(letter) {
            return GuessOutcome::AlreadyGuessed;
        }
        self.guessed.push(letter);

        if self.target.has_letter(letter) {
            GuessOutcome::Hit
        } else {
            self.remaining_lives = self.remaining_lives.saturating_sub(1);
            GuessOutcome::Miss
        }
    }

    /// Current status, reporting a loss ahead of a win
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.remaining_lives == 0 {
            GameStatus::Lost
        } else if self.is_won() {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status().is_over()
    }

    /// Whether every letter of the word has been guessed, regardless of lives
    #[inline]
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.target.is_revealed_by(&self.guessed_set)
    }

    /// The word with unguessed letters replaced by [`PLACEHOLDER`]
    ///
    /// Always one token per character of the target word.
    #[must_use]
    pub fn masked_word(&self) -> Vec<char> {
        self.target
            .chars()
            .iter()
            .map(|c| {
                if self.guessed_set.contains(c) {
                    *c
                } else {
                    PLACEHOLDER
                }
            })
            .collect()
    }

    /// Lookup key for the gallows figure, in `0..=MAX_LIVES`
    #[inline]
    #[must_use]
    pub fn drawing_stage(&self) -> usize {
        usize::from(self.remaining_lives)
    }

    /// Letters guessed so far, in the order they were guessed
    #[inline]
    #[must_use]
    pub fn guessed_letters(&self) -> &[char] {
        &self.guessed
    }

    #[inline]
    #[must_use]
    pub const fn remaining_lives(&self) -> u8 {
        self.remaining_lives
    }

    #[inline]
    #[must_use]
    pub const fn max_lives(&self) -> u8 {
        self.max_lives
    }

    #[inline]
    #[must_use]
    pub const fn target(&self) -> &TargetWord {
        &self.target
    }
}
