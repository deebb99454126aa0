//! Feedback pattern calculation and representation
//!
//! A pattern records, per position, how a guessed letter relates to a
//! candidate word: in the right spot, elsewhere in the word, or not in the
//! word at all. Patterns carry a total order so that partition maps keyed by
//! pattern iterate the same way on every run.

use super::Word;

/// Per-position feedback for one guessed letter
///
/// The variant order defines the canonical pattern order used for tie-breaking:
/// `Exact < Present < Absent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Mark {
    /// Letter is in the candidate word at this exact position
    Exact,
    /// Letter is in the candidate word, but at a different position
    Present,
    /// Letter is not in the candidate word (or all its occurrences are claimed)
    Absent,
}

/// Feedback pattern for a guess against one candidate word
///
/// One mark per position. Equality and ordering are lexicographic over the
/// marks, so a `BTreeMap` keyed by `Pattern` yields the canonical order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pattern(Box<[Mark]>);

impl Pattern {
    /// The all-Exact (winning) pattern of a given length
    #[must_use]
    pub fn winning(len: usize) -> Self {
        Self(vec![Mark::Exact; len].into_boxed_slice())
    }

    /// Calculate the pattern when `guess` is played against `candidate`
    ///
    /// Implements the standard duplicate-letter feedback rules: exact matches
    /// claim letters first, then remaining occurrences are handed out
    /// left-to-right as Present, and everything else is Absent.
    ///
    /// Both words must have the same length; the session boundary enforces
    /// this with a real error before calling in.
    ///
    /// # Examples
    /// ```
    /// use absurdle::core::{Mark, Pattern, Word};
    ///
    /// let candidate = Word::new("slate").unwrap();
    /// let guess = Word::new("crane").unwrap();
    /// let pattern = Pattern::calculate(&candidate, &guess);
    ///
    /// // C(absent) R(absent) A(exact) N(absent) E(exact)
    /// assert_eq!(
    ///     pattern.marks(),
    ///     &[Mark::Absent, Mark::Absent, Mark::Exact, Mark::Absent, Mark::Exact]
    /// );
    /// ```
    #[must_use]
    pub fn calculate(candidate: &Word, guess: &Word) -> Self {
        debug_assert_eq!(
            candidate.len(),
            guess.len(),
            "candidate and guess must have equal length"
        );

        let len = guess.len();
        let mut marks = vec![Mark::Absent; len];
        let mut resolved = vec![false; len];
        let mut available = candidate.char_counts();

        // Exact pass: matching positions claim their letter first
        for i in 0..len {
            if guess.bytes()[i] == candidate.bytes()[i] {
                marks[i] = Mark::Exact;
                resolved[i] = true;

                let letter = guess.bytes()[i];
                if let Some(count) = available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Present pass: unresolved positions, left to right, while letters remain
        for i in 0..len {
            if resolved[i] {
                continue;
            }
            let letter = guess.bytes()[i];
            if let Some(count) = available.get_mut(&letter)
                && *count > 0
            {
                marks[i] = Mark::Present;
                *count -= 1;
            }
            // Otherwise the position keeps its Absent mark
        }

        Self(marks.into_boxed_slice())
    }

    /// The marks, one per position
    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.0
    }

    /// Number of positions in the pattern
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the pattern has no positions
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if this pattern ends the game (no Present or Absent marks)
    #[inline]
    #[must_use]
    pub fn is_winning(&self) -> bool {
        self.0.iter().all(|&m| m == Mark::Exact)
    }

    /// Count positions marked Exact
    #[must_use]
    pub fn count_exact(&self) -> usize {
        self.0.iter().filter(|&&m| m == Mark::Exact).count()
    }

    /// Count positions marked Present
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&m| m == Mark::Present).count()
    }

    /// Parse a pattern from a string like "GY-GY" or "🟩🟨🟩🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for Exact
    /// - 'Y'/'y'/🟨 for Present
    /// - '-'/'_'/⬜ for Absent
    ///
    /// # Examples
    /// ```
    /// use absurdle::core::Pattern;
    ///
    /// let p1 = Pattern::from_str("GY-GY").unwrap();
    /// let p2 = Pattern::from_str("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        if s.is_empty() {
            return None;
        }

        let marks: Option<Vec<Mark>> = s
            .chars()
            .map(|ch| match ch {
                'G' | 'g' | '🟩' => Some(Mark::Exact),
                'Y' | 'y' | '🟨' => Some(Mark::Present),
                '-' | '_' | '⬜' => Some(Mark::Absent),
                _ => None,
            })
            .collect();

        marks.map(|m| Self(m.into_boxed_slice()))
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}

impl FromIterator<Mark> for Pattern {
    fn from_iter<I: IntoIterator<Item = Mark>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn pattern_all_absent() {
        let pattern = Pattern::calculate(&word("fghij"), &word("abcde"));

        assert!(pattern.marks().iter().all(|&m| m == Mark::Absent));
        assert!(!pattern.is_winning());
    }

    #[test]
    fn pattern_self_is_winning() {
        for text in ["crane", "slate", "zzzzz", "a", "adversarial"] {
            let w = word(text);
            let pattern = Pattern::calculate(&w, &w);
            assert!(pattern.is_winning(), "{text} vs itself must be all Exact");
            assert_eq!(pattern, Pattern::winning(w.len()));
        }
    }

    #[test]
    fn pattern_duplicate_letters_exact_takes_priority() {
        // SPEED vs ERASE: S(present) P(absent) E(present) E(present) D(absent)
        // ERASE has two E's, so both guessed E's can be Present
        let pattern = Pattern::calculate(&word("erase"), &word("speed"));

        assert_eq!(
            pattern.marks(),
            &[
                Mark::Present,
                Mark::Absent,
                Mark::Present,
                Mark::Present,
                Mark::Absent
            ]
        );
    }

    #[test]
    fn pattern_duplicate_letters_complex() {
        // ROBOT vs FLOOR: R(present) O(present) B(absent) O(exact) T(absent)
        // Second O claims its exact spot; first O takes a remaining occurrence
        let pattern = Pattern::calculate(&word("floor"), &word("robot"));

        assert_eq!(
            pattern.marks(),
            &[
                Mark::Present,
                Mark::Present,
                Mark::Absent,
                Mark::Exact,
                Mark::Absent
            ]
        );
    }

    #[test]
    fn pattern_duplicate_guess_letters_limited_by_candidate() {
        // Guess has three O's, candidate ROBOT has two: only two may be marked
        let pattern = Pattern::calculate(&word("robot"), &word("ooooo"));

        let claimed = pattern.count_exact() + pattern.count_present();
        assert_eq!(claimed, 2);
        // Position 1 and 3 are the exact O's
        assert_eq!(pattern.marks()[1], Mark::Exact);
        assert_eq!(pattern.marks()[3], Mark::Exact);
    }

    #[test]
    fn pattern_multiset_conservation() {
        // For any pair, a letter is never marked (Exact + Present) more times
        // than it occurs in the candidate word
        let pairs = [
            ("abb", "bba"),
            ("erase", "speed"),
            ("floor", "robot"),
            ("aabbb", "bbbaa"),
            ("abab", "bbbb"),
        ];

        for (candidate, guess) in pairs {
            let c = word(candidate);
            let g = word(guess);
            let pattern = Pattern::calculate(&c, &g);
            let counts = c.char_counts();

            for (&letter, &count) in &counts {
                let claimed = g
                    .bytes()
                    .iter()
                    .zip(pattern.marks())
                    .filter(|&(&b, &m)| b == letter && m != Mark::Absent)
                    .count();
                assert!(
                    claimed <= usize::from(count),
                    "{guess} vs {candidate}: letter {} claimed {claimed} times, occurs {count}",
                    letter as char
                );
            }
        }
    }

    #[test]
    fn mark_canonical_order() {
        assert!(Mark::Exact < Mark::Present);
        assert!(Mark::Present < Mark::Absent);
    }

    #[test]
    fn pattern_order_is_lexicographic() {
        let winning = Pattern::from_str("GGG").unwrap();
        let close = Pattern::from_str("GGY").unwrap();
        let miss = Pattern::from_str("---").unwrap();

        assert!(winning < close);
        assert!(close < miss);
    }

    #[test]
    fn pattern_from_str_valid() {
        let p1 = Pattern::from_str("GYG--").unwrap();
        let p2 = Pattern::from_str("🟩🟨🟩⬜⬜").unwrap();
        let p3 = Pattern::from_str("gyg__").unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1.count_exact(), 2);
        assert_eq!(p1.count_present(), 1);
    }

    #[test]
    fn pattern_from_str_invalid() {
        assert!(Pattern::from_str("GXGGY").is_none()); // Invalid char
        assert!(Pattern::from_str("").is_none()); // Empty
    }

    #[test]
    fn pattern_winning_constructor() {
        let p = Pattern::winning(4);
        assert_eq!(p.len(), 4);
        assert!(p.is_winning());
        assert_eq!(p.count_exact(), 4);
    }
}
