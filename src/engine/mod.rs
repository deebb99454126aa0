//! Adversarial game engine
//!
//! Instead of committing to a secret word, the engine partitions the surviving
//! candidates by feedback pattern on every guess and keeps the largest group.

mod error;
pub mod partition;
mod session;

pub use error::GameError;
pub use session::Session;
