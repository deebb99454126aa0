//! Dictionary loading and pruning
//!
//! The dictionary is an external file; the engine only ever sees the pruned,
//! de-duplicated candidate set of the session's word length.

pub mod loader;

use crate::core::Word;
use crate::engine::GameError;
use std::collections::BTreeSet;

/// Prune raw dictionary tokens down to the candidate set
///
/// Keeps tokens of exactly `word_length` letters that validate as words,
/// de-duplicated into a sorted set. Tokens of other lengths or with invalid
/// characters are skipped.
///
/// # Errors
/// Returns `InvalidLength` if `word_length` is less than 1.
///
/// # Examples
/// ```
/// use absurdle::wordlists::prune;
///
/// let tokens = ["cat", "dog", "a", "tree"].map(String::from);
/// let candidates = prune(&tokens, 3).unwrap();
/// assert_eq!(candidates.len(), 2);
/// ```
pub fn prune(contents: &[String], word_length: usize) -> Result<BTreeSet<Word>, GameError> {
    if word_length < 1 {
        return Err(GameError::InvalidLength(word_length));
    }

    Ok(contents
        .iter()
        .filter(|token| token.len() == word_length)
        .filter_map(|token| Word::new(token.as_str()).ok())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(texts: &[&str]) -> Vec<String> {
        texts.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn prune_filters_by_length() {
        let candidates = prune(&tokens(&["cat", "dog", "a", "tree"]), 3).unwrap();

        let texts: Vec<&str> = candidates.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["cat", "dog"]);
    }

    #[test]
    fn prune_rejects_zero_length() {
        assert_eq!(
            prune(&tokens(&["cat", "dog"]), 0),
            Err(GameError::InvalidLength(0))
        );
    }

    #[test]
    fn prune_deduplicates() {
        let candidates = prune(&tokens(&["cat", "cat", "dog", "cat"]), 3).unwrap();
        assert_eq!(candidates.len(), 2);
    }

    #[test]
    fn prune_skips_invalid_tokens() {
        let candidates = prune(&tokens(&["cat", "d0g", "ca!", "bee"]), 3).unwrap();

        let texts: Vec<&str> = candidates.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["bee", "cat"]);
    }

    #[test]
    fn prune_empty_contents() {
        let candidates = prune(&[], 5).unwrap();
        assert!(candidates.is_empty());
    }

    #[test]
    fn prune_iterates_in_sorted_order() {
        let candidates = prune(&tokens(&["dog", "bee", "cat", "ant"]), 3).unwrap();

        let texts: Vec<&str> = candidates.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["ant", "bee", "cat", "dog"]);
    }
}
