//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing. The engine itself
//! never prints; everything user-facing lives here and in `commands`.

pub mod display;
pub mod formatters;

pub use display::{print_analysis_result, print_game_summary};
