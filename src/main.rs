//! Absurdle - CLI
//!
//! Adversarial Wordle variant: no secret word is ever chosen. Each guess keeps
//! the feedback pattern with the most surviving candidates.

use absurdle::{
    commands::{analyze_guess, run_play},
    engine::Session,
    output::print_analysis_result,
    wordlists::{loader::load_from_file, prune},
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "absurdle",
    about = "Adversarial Wordle variant that never commits to a secret word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a dictionary file of whitespace-separated words
    #[arg(short, long, global = true, default_value = "dictionary.txt")]
    dictionary: String,

    /// Word length for the session
    #[arg(short, long, global = true, default_value = "5")]
    length: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game interactively (default)
    Play,

    /// Show how a guess would partition the candidate set
    Analyze {
        /// The guess to analyze
        guess: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let tokens = load_from_file(&cli.dictionary)
        .with_context(|| format!("failed to read dictionary '{}'", cli.dictionary))?;
    let candidates = prune(&tokens, cli.length)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let session = Session::new(candidates, cli.length)?;
            run_play(session).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Analyze { guess } => {
            let result = analyze_guess(&guess, &candidates, cli.length)?;
            print_analysis_result(&result);
            Ok(())
        }
    }
}
