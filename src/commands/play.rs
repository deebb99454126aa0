//! Interactive game loop
//!
//! Reads guesses from stdin, shows the adversarially-chosen pattern for each,
//! and prints the shareable report when the player finally forces a win.

use crate::engine::Session;
use crate::output::formatters::pattern_to_emoji;
use crate::output::print_game_summary;
use colored::Colorize;
use std::io::{self, Write};

/// Run the interactive game until the emitted pattern is winning
///
/// Invalid guesses re-prompt instead of ending the game.
///
/// # Errors
///
/// Returns an error if stdin or stdout fails, or if input ends before the
/// game finishes.
pub fn run_play(mut session: Session) -> Result<(), String> {
    println!("\n{}", "Welcome to the game of Absurdle.".bold());
    println!(
        "Guess {}-letter words; I never picked one, so good luck.\n",
        session.word_length()
    );

    while !session.is_finished() {
        let guess = get_user_input(">")?;

        match session.record(&guess) {
            Ok(pattern) => {
                println!(": {}", pattern_to_emoji(&pattern));
                println!();
            }
            Err(e) => {
                println!("{} {e}\n", "✗".red());
            }
        }
    }

    print_game_summary(session.history());
    Ok(())
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt} ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let bytes = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    if bytes == 0 {
        return Err("input ended before the game finished".to_string());
    }

    Ok(input.trim().to_string())
}
