//! Precomputed feedback for every (guess, secret) pair

use crate::core::{Pattern, WordleInstance};
use rayon::prelude::*;

/// Dense `[guess][secret]` matrix of feedback patterns
///
/// Built once per run; every other component reads patterns from here
/// instead of rescoring words.
#[derive(Debug, Clone)]
pub struct ScoreCache {
    n_guesses: usize,
    n_secrets: usize,
    patterns: Vec<Pattern>,
}

impl ScoreCache {
    /// Score every guess against every secret
    ///
    /// Rows are independent, so they are filled in parallel.
    #[must_use]
    pub fn new(instance: &WordleInstance) -> Self {
        let n_secrets = instance.n_secrets();
        let mut patterns = vec![Pattern::new(0); instance.n_guesses() * n_secrets];

        if n_secrets > 0 {
            patterns
                .par_chunks_mut(n_secrets)
                .zip(instance.guesses().par_iter())
                .for_each(|(row, guess)| {
                    for (slot, secret) in row.iter_mut().zip(instance.secrets()) {
                        *slot = Pattern::calculate(guess, secret);
                    }
                });
        }

        Self {
            n_guesses: instance.n_guesses(),
            n_secrets,
            patterns,
        }
    }

    /// Pattern shown when `guess` is played against `secret`
    #[inline]
    #[must_use]
    pub fn get(&self, guess: usize, secret: usize) -> Pattern {
        self.patterns[guess * self.n_secrets + secret]
    }

    /// All patterns of one guess, indexed by secret
    #[inline]
    #[must_use]
    pub fn row(&self, guess: usize) -> &[Pattern] {
        let start = guess * self.n_secrets;
        &self.patterns[start..start + self.n_secrets]
    }

    #[must_use]
    pub const fn n_secrets(&self) -> usize {
        self.n_secrets
    }

    #[must_use]
    pub const fn n_guesses(&self) -> usize {
        self.n_guesses
    }
}
