//! Partition analysis for a single guess
//!
//! One-shot inspection: shows how a guess would split the candidate set and
//! which group the adversary would keep.

use crate::core::{Pattern, Word};
use crate::engine::{GameError, partition};
use std::collections::BTreeSet;

/// How many of the biggest groups to report
const TOP_GROUPS: usize = 5;

/// Result of analyzing one guess against a candidate set
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub guess: String,
    pub total_candidates: usize,
    pub group_count: usize,
    pub chosen_pattern: Pattern,
    pub chosen_size: usize,
    /// Largest groups first; ties in canonical pattern order
    pub largest_groups: Vec<(Pattern, usize)>,
}

/// Analyze how a guess partitions the candidate set
///
/// # Errors
/// Returns `InvalidGuess` under the same contract as a real guess: wrong
/// length, invalid characters, or an empty candidate set.
pub fn analyze_guess(
    guess: &str,
    candidates: &BTreeSet<Word>,
    word_length: usize,
) -> Result<AnalysisResult, GameError> {
    if guess.len() != word_length {
        return Err(GameError::InvalidGuess(format!(
            "expected {word_length} letters, got {}",
            guess.len()
        )));
    }
    if candidates.is_empty() {
        return Err(GameError::InvalidGuess(
            "no candidate words remain".to_string(),
        ));
    }

    let guess_word = Word::new(guess).map_err(|e| GameError::InvalidGuess(e.to_string()))?;

    let groups = partition::partition(&guess_word, candidates);
    let group_count = groups.len();

    let mut sizes: Vec<(Pattern, usize)> = groups
        .into_iter()
        .map(|(pattern, group)| (pattern, group.len()))
        .collect();

    // Largest first; BTreeMap order already breaks size ties canonically,
    // and the sort is stable
    sizes.sort_by(|a, b| b.1.cmp(&a.1));

    // Safe: candidates is non-empty, so at least one group exists
    let (chosen_pattern, chosen_size) = sizes[0].clone();

    Ok(AnalysisResult {
        guess: guess.to_string(),
        total_candidates: candidates.len(),
        group_count,
        chosen_pattern,
        chosen_size,
        largest_groups: sizes.into_iter().take(TOP_GROUPS).collect(),
    })
}
