//! Wordle Tree
//!
//! Finds the Wordle guessing strategy that needs the fewest guesses in total
//! over a list of secrets, by branch-and-bound search over an entropy-ranked
//! guess list.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_tree::core::WordleInstance;
//! use wordle_tree::solver::{SearchConfig, Solver};
//! use wordle_tree::wordlists::loader::words_from_slice;
//!
//! let words = words_from_slice(&["slate", "crate", "plate"]);
//! let instance = WordleInstance::new(words.clone(), words, false).unwrap();
//!
//! let result = Solver::new(&instance, SearchConfig::default()).solve();
//! // "slate" tells the other two apart: 1 + 2 + 2
//! assert_eq!(result.total, 5);
//! ```

// Core domain types
pub mod core;

// Tree search
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output, logging and JSON
pub mod output;
