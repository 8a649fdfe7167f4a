//! Core domain types for Wordle
//!
//! Words, feedback patterns and the validated instance the search runs on.
//! Nothing here depends on the solver.

mod instance;
mod pattern;
mod word;

pub use instance::{InstanceError, WordleInstance};
pub use pattern::{Feedback, Pattern};
pub use word::{Word, WordError};

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;
