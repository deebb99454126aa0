//! Formatting utilities for terminal output

use crate::core::{Mark, Pattern};

/// Format a pattern as a tile string
///
/// # Examples
/// ```
/// use absurdle::core::Pattern;
/// use absurdle::output::formatters::pattern_to_emoji;
///
/// let pattern = Pattern::from_str("GY-").unwrap();
/// assert_eq!(pattern_to_emoji(&pattern), "🟩🟨⬜");
/// ```
#[must_use]
pub fn pattern_to_emoji(pattern: &Pattern) -> String {
    pattern
        .marks()
        .iter()
        .map(|mark| match mark {
            Mark::Exact => '🟩',
            Mark::Present => '🟨',
            Mark::Absent => '⬜',
        })
        .collect()
}

/// Format a pattern as plain ASCII (G/Y/-) for terminals without emoji
#[must_use]
pub fn pattern_to_ascii(pattern: &Pattern) -> String {
    pattern
        .marks()
        .iter()
        .map(|mark| match mark {
            Mark::Exact => 'G',
            Mark::Present => 'Y',
            Mark::Absent => '-',
        })
        .collect()
}
