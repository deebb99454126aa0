//! Candidate partitioning and adversarial group selection
//!
//! Given a guess, the candidate set splits into groups by the feedback pattern
//! each candidate would produce. The adversary keeps the largest group alive;
//! ties go to the smallest pattern under the canonical order, so identical
//! inputs always select the same group.

use crate::core::{Pattern, Word};
use std::collections::{BTreeMap, BTreeSet};

/// Group candidates by the pattern they would produce for `guess`
///
/// Every candidate lands in exactly one group. The map is keyed in canonical
/// pattern order and built fresh per guess.
#[must_use]
pub fn partition(guess: &Word, candidates: &BTreeSet<Word>) -> BTreeMap<Pattern, BTreeSet<Word>> {
    let mut groups: BTreeMap<Pattern, BTreeSet<Word>> = BTreeMap::new();

    for candidate in candidates {
        let pattern = Pattern::calculate(candidate, guess);
        groups.entry(pattern).or_default().insert(candidate.clone());
    }

    groups
}

/// Select the largest group from a partition
///
/// Scans groups in ascending pattern order with a strict `>` comparison, so
/// among equal-maximal groups the smallest pattern wins. Returns `None` only
/// for an empty partition, which the session precondition rules out.
#[must_use]
pub fn select_largest(
    groups: BTreeMap<Pattern, BTreeSet<Word>>,
) -> Option<(Pattern, BTreeSet<Word>)> {
    let mut chosen: Option<(Pattern, BTreeSet<Word>)> = None;

    for (pattern, group) in groups {
        let max = chosen.as_ref().map_or(0, |(_, g)| g.len());
        if group.len() > max {
            chosen = Some((pattern, group));
        }
    }

    chosen
}
