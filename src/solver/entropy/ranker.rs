//! Entropy-ordered guess selection for the tree search
//!
//! Decides which guesses a search node tries, and in which order.

use super::calculator::unnormalized_entropy;
use crate::core::Pattern;
use crate::solver::{ScoreCache, SearchConfig};
use rayon::prelude::*;

/// Work size (guesses × candidates) above which guesses are scored in parallel
const PARALLEL_THRESHOLD: usize = 1 << 14;

/// A guess together with its unnormalized entropy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedGuess {
    pub guess: usize,
    pub entropy: f64,
}

impl RankedGuess {
    /// Entropy in bits for a node with `n_candidates` secrets
    #[must_use]
    pub fn bits(&self, n_candidates: usize) -> f64 {
        if n_candidates == 0 {
            0.0
        } else {
            self.entropy / n_candidates as f64
        }
    }
}

/// What a node should try next
#[derive(Debug, Clone, PartialEq)]
pub enum Ranking {
    /// This guess leaves every candidate alone in its group, so the node is
    /// solved with it directly
    Shortcut(usize),
    /// Guesses worth trying, best first
    Ordered(Vec<RankedGuess>),
}

struct ScoredGuess {
    guess: usize,
    entropy: f64,
    singleton_split: bool,
    is_candidate: bool,
}

fn score_guess(cache: &ScoreCache, guess: usize, candidates: &[usize]) -> ScoredGuess {
    let mut counts = [0; Pattern::COUNT];
    let mut singleton_split = true;
    let row = cache.row(guess);

    for &secret in candidates {
        let count = &mut counts[row[secret].index()];
        *count += 1;
        singleton_split &= *count == 1;
    }

    ScoredGuess {
        guess,
        entropy: unnormalized_entropy(&counts, candidates.len()),
        singleton_split,
        is_candidate: counts[Pattern::PERFECT.index()] > 0,
    }
}

fn score_all(cache: &ScoreCache, candidates: &[usize], guesses: &[usize]) -> Vec<ScoredGuess> {
    if guesses.len() * candidates.len() >= PARALLEL_THRESHOLD {
        guesses
            .par_iter()
            .map(|&guess| score_guess(cache, guess, candidates))
            .collect()
    } else {
        guesses
            .iter()
            .map(|&guess| score_guess(cache, guess, candidates))
            .collect()
    }
}

fn sort_by_entropy(ranked: &mut [RankedGuess]) {
    // Stable: equal entropies keep allowed-set order
    ranked.sort_by(|a, b| b.entropy.total_cmp(&a.entropy));
}

/// Every allowed guess ordered by entropy, best first
///
/// Ties keep the order of `guesses`.
#[must_use]
pub fn entropy_order(cache: &ScoreCache, candidates: &[usize], guesses: &[usize]) -> Vec<RankedGuess> {
    let mut ranked: Vec<RankedGuess> = score_all(cache, candidates, guesses)
        .into_iter()
        .map(|scored| RankedGuess {
            guess: scored.guess,
            entropy: scored.entropy,
        })
        .collect();
    sort_by_entropy(&mut ranked);
    ranked
}

/// Rank the allowed guesses for one search node
///
/// A guess that splits the candidates into singletons is returned as a
/// [`Ranking::Shortcut`], preferring one that is itself a candidate (solving
/// the node in `2n - 1` guesses). Otherwise guesses are ordered by entropy,
/// limited to `config.search_breadth`, and cut where entropy drops below
/// `config.entropy_cutoff` times the best.
#[must_use]
pub fn rank_guesses(
    cache: &ScoreCache,
    candidates: &[usize],
    guesses: &[usize],
    config: &SearchConfig,
) -> Ranking {
    let scored = score_all(cache, candidates, guesses);

    let shortcut = scored
        .iter()
        .find(|s| s.singleton_split && s.is_candidate)
        .or_else(|| scored.iter().find(|s| s.singleton_split));
    if let Some(s) = shortcut {
        return Ranking::Shortcut(s.guess);
    }

    let mut ranked: Vec<RankedGuess> = scored
        .into_iter()
        .map(|scored| RankedGuess {
            guess: scored.guess,
            entropy: scored.entropy,
        })
        .collect();
    sort_by_entropy(&mut ranked);
    ranked.truncate(config.search_breadth);

    if let Some(top) = ranked.first().map(|r| r.entropy) {
        let min_entropy = config.entropy_cutoff * top;
        if let Some(cut) = ranked.iter().position(|r| r.entropy < min_entropy) {
            ranked.truncate(cut);
        }
    }

    Ranking::Ordered(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordleInstance;
    use crate::wordlists::loader::words_from_slice;

    fn cache_for(secrets: &[&str], guesses: &[&str]) -> ScoreCache {
        let instance =
            WordleInstance::new(words_from_slice(secrets), words_from_slice(guesses), false)
                .unwrap();
        ScoreCache::new(&instance)
    }

    #[test]
    fn orders_by_entropy_descending() {
        let cache = cache_for(
            &["slate", "irate", "crate", "grate"],
            &["aaaaa", "slate", "irate", "crate", "grate", "cigar"],
        );
        let ranked = entropy_order(&cache, &[0, 1, 2, 3], &[0, 1, 2, 3, 4, 5]);

        assert_eq!(ranked.len(), 6);
        assert!(ranked.windows(2).all(|w| w[0].entropy >= w[1].entropy));
        // "aaaaa" sees the same pattern for all four
        assert_eq!(ranked.last().unwrap().guess, 0);
        assert!(ranked.last().unwrap().entropy.abs() < 1e-9);
    }

    #[test]
    fn ties_keep_allowed_order() {
        let cache = cache_for(&["ccccc"], &["aaaaa", "bbbbb", "ccccc"]);
        let ranked = entropy_order(&cache, &[0], &[0, 1]);
        assert_eq!(ranked[0].guess, 0);
        assert_eq!(ranked[1].guess, 1);

        let reversed = entropy_order(&cache, &[0], &[1, 0]);
        assert_eq!(reversed[0].guess, 1);
    }

    #[test]
    fn shortcut_prefers_candidate_guess() {
        // "scpzz" separates all three but is not a candidate; "slate" is
        let cache = cache_for(
            &["slate", "crate", "plate"],
            &["scpzz", "slate", "crate", "plate"],
        );
        let ranking = rank_guesses(&cache, &[0, 1, 2], &[0, 1, 2, 3], &SearchConfig::default());
        assert_eq!(ranking, Ranking::Shortcut(1));
    }

    #[test]
    fn shortcut_falls_back_to_non_candidate() {
        // Only "cpzzz" tells grate/crate/prate apart
        let cache = cache_for(
            &["grate", "crate", "prate"],
            &["grate", "crate", "prate", "cpzzz"],
        );
        let ranking = rank_guesses(&cache, &[0, 1, 2], &[0, 1, 2, 3], &SearchConfig::default());
        assert_eq!(ranking, Ranking::Shortcut(3));
    }

    #[test]
    fn breadth_and_cutoff_limit_the_list() {
        let secrets = ["grate", "crate", "prate", "irate", "orate"];
        let guesses = ["grate", "crate", "prate", "irate", "orate", "zzzzz"];
        let cache = cache_for(&secrets, &guesses);
        let candidates = [0, 1, 2, 3, 4];
        let all = [0, 1, 2, 3, 4, 5];

        let Ranking::Ordered(ranked) =
            rank_guesses(&cache, &candidates, &all, &SearchConfig::exhaustive())
        else {
            panic!("no guess separates every candidate");
        };
        assert_eq!(ranked.len(), 6);

        let Ranking::Ordered(narrow) =
            rank_guesses(&cache, &candidates, &all, &SearchConfig::new(2, 0.0))
        else {
            panic!("no guess separates every candidate");
        };
        assert_eq!(narrow.len(), 2);

        // "zzzzz" has zero entropy and falls under any positive cutoff
        let Ranking::Ordered(cut) =
            rank_guesses(&cache, &candidates, &all, &SearchConfig::new(10, 0.5))
        else {
            panic!("no guess separates every candidate");
        };
        assert!(cut.iter().all(|r| r.guess != 5));
    }

    #[test]
    fn bits_normalizes() {
        let ranked = RankedGuess {
            guess: 0,
            entropy: 8.0,
        };
        assert!((ranked.bits(4) - 2.0).abs() < f64::EPSILON);
        assert!(ranked.bits(0).abs() < f64::EPSILON);
    }
}
