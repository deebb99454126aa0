//! Game session state
//!
//! A session owns the evolving candidate set and the history of emitted
//! patterns. Every guess narrows the candidate set to the adversarially-chosen
//! group; nothing else mutates it.

use super::error::GameError;
use super::partition::{partition, select_largest};
use crate::core::{Pattern, Word};
use std::collections::BTreeSet;

/// One adversarial game: fixed word length, candidate set, pattern history
#[derive(Debug, Clone)]
pub struct Session {
    word_length: usize,
    candidates: BTreeSet<Word>,
    history: Vec<Pattern>,
}

impl Session {
    /// Start a session over a pruned candidate set
    ///
    /// # Errors
    /// Returns `InvalidLength` if `word_length` is 0, and `InvalidGuess` if
    /// the candidate set is empty or holds a word of a different length.
    pub fn new(candidates: BTreeSet<Word>, word_length: usize) -> Result<Self, GameError> {
        if word_length < 1 {
            return Err(GameError::InvalidLength(word_length));
        }
        if candidates.is_empty() {
            return Err(GameError::InvalidGuess(
                "no candidate words of the requested length".to_string(),
            ));
        }
        if let Some(bad) = candidates.iter().find(|w| w.len() != word_length) {
            return Err(GameError::InvalidGuess(format!(
                "candidate '{bad}' does not have length {word_length}"
            )));
        }

        Ok(Self {
            word_length,
            candidates,
            history: Vec::new(),
        })
    }

    /// Evaluate a guess: partition the candidates, keep the largest group
    ///
    /// Replaces the candidate set with the chosen group, appends the chosen
    /// pattern to the history, and returns it. On error nothing is mutated.
    ///
    /// # Errors
    /// Returns `InvalidGuess` if the guess has the wrong length, fails word
    /// validation, or no candidates remain.
    pub fn record(&mut self, guess: &str) -> Result<Pattern, GameError> {
        if guess.len() != self.word_length {
            return Err(GameError::InvalidGuess(format!(
                "expected {} letters, got {}",
                self.word_length,
                guess.len()
            )));
        }
        if self.candidates.is_empty() {
            return Err(GameError::InvalidGuess(
                "no candidate words remain".to_string(),
            ));
        }

        let guess =
            Word::new(guess).map_err(|e| GameError::InvalidGuess(e.to_string()))?;

        let groups = partition(&guess, &self.candidates);
        // Safe: the candidate set was just checked to be non-empty
        let (pattern, group) =
            select_largest(groups).expect("partition of a non-empty set has a largest group");

        self.candidates = group;
        self.history.push(pattern.clone());
        Ok(pattern)
    }

    /// Check if the game is finished (last emitted pattern was winning)
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.history.last().is_some_and(Pattern::is_winning)
    }

    /// The fixed word length for this session
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Words still consistent with every pattern shown so far
    #[must_use]
    pub const fn candidates(&self) -> &BTreeSet<Word> {
        &self.candidates
    }

    /// Patterns emitted so far, in order
    #[must_use]
    pub fn history(&self) -> &[Pattern] {
        &self.history
    }

    /// Number of guesses evaluated so far
    #[must_use]
    pub fn turns(&self) -> usize {
        self.history.len()
    }
}
