//! Decision-tree optimization
//!
//! [`Solver`] runs a branch-and-bound search over guesses, ranked by entropy,
//! and returns the tree with the smallest total number of guesses.

mod config;
mod engine;
pub mod entropy;
pub mod hard_mode;
pub mod partition;
mod score_cache;
pub mod search;
pub mod subtree_cache;
pub mod tree;

pub use config::SearchConfig;
pub use engine::{SolveResult, Solver};
pub use score_cache::ScoreCache;
pub use tree::{Branch, DecisionNode, NodeStats};
