//! Absurdle
//!
//! An adversarial variant of Wordle: the engine never commits to a secret
//! word. It keeps every word still consistent with the feedback shown so far
//! and, on each guess, reveals the pattern that preserves the largest
//! surviving candidate set, prolonging the game as long as possible.
//!
//! # Quick Start
//!
//! ```rust
//! use absurdle::engine::Session;
//! use absurdle::wordlists::prune;
//!
//! let tokens = ["cat", "car", "can", "dog"].map(String::from);
//! let candidates = prune(&tokens, 3).unwrap();
//!
//! let mut session = Session::new(candidates, 3).unwrap();
//! let pattern = session.record("cat").unwrap();
//!
//! // The adversary kept "car" and "can" alive instead of conceding
//! assert!(!pattern.is_winning());
//! assert_eq!(session.candidates().len(), 2);
//! ```

// Core domain types
pub mod core;

// Adversarial partitioning engine
pub mod engine;

// Dictionary loading and pruning
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
