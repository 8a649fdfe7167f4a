//! Opening guess analysis
//!
//! Ranks the allowed guesses by how well they split all secrets, or reports
//! on a single guess.

use crate::core::{Pattern, WordleInstance};
use crate::solver::ScoreCache;
use crate::solver::entropy::{entropy_order, shannon_entropy};
use crate::solver::partition::count_patterns;
use std::fmt;

/// Error type for analysis requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyzeError {
    /// The word is not in the guess list
    UnknownGuess(String),
}

impl fmt::Display for AnalyzeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownGuess(word) => write!(f, "Word '{word}' not in guess list"),
        }
    }
}

impl std::error::Error for AnalyzeError {}

/// How one guess splits the secrets
#[derive(Debug, Clone, PartialEq)]
pub struct GuessAnalysis {
    pub word: String,
    /// Bits
    pub entropy: f64,
    /// Distinct patterns the guess can show
    pub groups: usize,
    pub largest_group: usize,
    /// Candidates left on average after the guess
    pub expected_remaining: f64,
    pub is_candidate: bool,
}

/// Analysis of the best opening guesses
pub struct AnalysisResult {
    pub total_candidates: usize,
    pub guesses: Vec<GuessAnalysis>,
}

fn describe(instance: &WordleInstance, scores: &ScoreCache, guess: usize) -> GuessAnalysis {
    let candidates: Vec<usize> = (0..instance.n_secrets()).collect();
    let mut counts = [0; Pattern::COUNT];
    count_patterns(scores, guess, &candidates, &mut counts);

    let n = candidates.len();
    let squares: usize = counts.iter().map(|&size| size * size).sum();
    GuessAnalysis {
        word: instance.guesses()[guess].text().to_string(),
        entropy: shannon_entropy(&counts),
        groups: counts.iter().filter(|&&size| size > 0).count(),
        largest_group: counts.iter().copied().max().unwrap_or(0),
        expected_remaining: if n == 0 {
            0.0
        } else {
            squares as f64 / n as f64
        },
        is_candidate: instance.secret_of_guess(guess).is_some(),
    }
}

/// The `top` guesses with the highest entropy over all secrets
#[must_use]
pub fn analyze_openers(instance: &WordleInstance, scores: &ScoreCache, top: usize) -> AnalysisResult {
    let candidates: Vec<usize> = (0..instance.n_secrets()).collect();
    let guesses: Vec<usize> = (0..instance.n_guesses()).collect();

    AnalysisResult {
        total_candidates: candidates.len(),
        guesses: entropy_order(scores, &candidates, &guesses)
            .into_iter()
            .take(top)
            .map(|ranked| describe(instance, scores, ranked.guess))
            .collect(),
    }
}

/// How `word` splits all secrets
///
/// # Errors
/// Returns `AnalyzeError::UnknownGuess` if `word` is not an allowed guess.
pub fn analyze_word(
    instance: &WordleInstance,
    scores: &ScoreCache,
    word: &str,
) -> Result<GuessAnalysis, AnalyzeError> {
    let word = word.to_lowercase();
    let guess = instance
        .find_guess(&word)
        .ok_or(AnalyzeError::UnknownGuess(word))?;
    Ok(describe(instance, scores, guess))
}
