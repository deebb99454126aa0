//! Core domain types
//!
//! This module contains the fundamental domain types with zero game logic.
//! All types here are pure, testable, and have clear mathematical properties.

mod pattern;
mod word;

pub use pattern::{Mark, Pattern};
pub use word::{Word, WordError};
