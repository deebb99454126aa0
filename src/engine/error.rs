//! Engine error types
//!
//! All variants are caller contract violations, not runtime failures. The
//! engine surfaces them immediately and mutates nothing on the error path.

use std::fmt;

/// Precondition violations for game setup and guess evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Requested word length was less than 1 during pruning
    InvalidLength(usize),
    /// Guess is unusable: wrong length, invalid characters, or no candidates left
    InvalidGuess(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word length must be at least 1, got {len}")
            }
            Self::InvalidGuess(reason) => write!(f, "Invalid guess: {reason}"),
        }
    }
}

impl std::error::Error for GameError {}
