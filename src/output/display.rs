//! Display functions for command results

use super::formatters::pattern_to_emoji;
use crate::commands::AnalysisResult;
use crate::core::Pattern;
use colored::Colorize;

/// Print the end-of-game report
///
/// Shows the guess count over the ∞ the game allows, then the shareable
/// pattern history.
pub fn print_game_summary(history: &[Pattern]) {
    println!();
    println!(
        "{}",
        format!("Absurdle {}/∞", history.len()).bright_green().bold()
    );
    println!();

    for pattern in history {
        println!("{}", pattern_to_emoji(pattern));
    }
}

/// Print how a guess partitions the candidate set
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PARTITION ANALYSIS:".bright_cyan().bold(),
        result.guess.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\nAgainst {} candidate words:", result.total_candidates);
    println!("   Groups:       {}", result.group_count);
    println!(
        "   Chosen:       {} ({} words kept)",
        pattern_to_emoji(&result.chosen_pattern),
        result.chosen_size.to_string().bright_yellow()
    );

    println!("\n{}", "Largest groups:".bright_cyan().bold());
    for (pattern, size) in &result.largest_groups {
        println!("   {} {size:6}", pattern_to_emoji(pattern));
    }
}
