//! Hangman target word
//!
//! A `TargetWord` stores the word to be guessed along with the set of distinct letters it
//! contains, so membership checks for a guess are a single hash lookup.

use rustc_hash::FxHashSet;
use std::fmt;
use thiserror::Error;

/// The word the player is trying to reveal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetWord {
    text: String,
    chars: Vec<char>,
    letters: FxHashSet<char>,
}

/// Error type for invalid target words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Target word must not be empty")]
    Empty,
    #[error("Target word must not contain whitespace")]
    ContainsWhitespace,
}

impl TargetWord {
    /// Create a new target word from a string
    ///
    /// The word is normalized to lowercase. Guesses are later compared against it
    /// case-sensitively.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The word is empty
    /// - The word contains any whitespace
    ///
    /// # Examples
    /// ```
    /// use hangman::core::TargetWord;
    ///
    /// let word = TargetWord::new("Balloons").unwrap();
    /// assert_eq!(word.text(), "balloons");
    ///
    /// assert!(TargetWord::new("").is_err());
    /// assert!(TargetWord::new("two words").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if text.chars().any(char::is_whitespace) {
            return Err(WordError::ContainsWhitespace);
        }

        let chars: Vec<char> = text.chars().collect();
        let letters = chars.iter().copied().collect();

        Ok(Self {
            text,
            chars,
            letters,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the characters of the word in order
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Check whether every distinct letter of the word is in `guessed`
    #[must_use]
    pub fn is_revealed_by(&self, guessed: &FxHashSet<char>) -> bool {
        self.letters.is_subset(guessed)
    }
}

impl fmt::Display for TargetWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
