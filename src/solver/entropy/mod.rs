//! Entropy scoring and ranking of candidate guesses

mod calculator;
mod ranker;

pub use calculator::{shannon_entropy, unnormalized_entropy};
pub use ranker::{RankedGuess, Ranking, entropy_order, rank_guesses};
