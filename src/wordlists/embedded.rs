//! Embedded word lists
//!
//! A small list compiled into the binary, used when no file is given.

/// The 50 words `aback` through `alibi`, one per line
pub const SAMPLE: &str = include_str!("../../data/sample_words.txt");

/// Number of words in [`SAMPLE`]
pub const SAMPLE_COUNT: usize = 50;
