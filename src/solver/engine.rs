//! Main optimizer interface

use super::search::TreeSearch;
use super::subtree_cache::SubtreeCache;
use super::tree::DecisionNode;
use super::{ScoreCache, SearchConfig};
use crate::core::WordleInstance;
use indicatif::ProgressBar;
use log::info;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Outcome of one optimization run
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// `None` when there are no secrets or nothing beats the bound
    pub tree: Option<Rc<DecisionNode>>,
    /// Guesses needed to solve every secret, summed
    pub total: usize,
    pub average: f64,
    pub duration: Duration,
    pub cache_hits: usize,
    /// Candidate sets looked up and not yet solved
    pub cache_misses: usize,
    pub cache_entries: usize,
}

/// Builds the score cache once and runs tree searches on an instance
///
/// # Examples
/// ```
/// use wordle_tree::core::WordleInstance;
/// use wordle_tree::solver::{SearchConfig, Solver};
/// use wordle_tree::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "slate"]);
/// let instance = WordleInstance::new(words.clone(), words, false).unwrap();
/// let result = Solver::new(&instance, SearchConfig::default()).solve();
/// assert_eq!(result.total, 3);
/// ```
pub struct Solver<'a> {
    instance: &'a WordleInstance,
    scores: ScoreCache,
    config: SearchConfig,
    progress: Option<ProgressBar>,
}

impl<'a> Solver<'a> {
    #[must_use]
    pub fn new(instance: &'a WordleInstance, config: SearchConfig) -> Self {
        let start = Instant::now();
        let scores = ScoreCache::new(instance);
        info!(
            "Scored {} guesses against {} secrets in {:.2?}",
            instance.n_guesses(),
            instance.n_secrets(),
            start.elapsed()
        );

        Self {
            instance,
            scores,
            config,
            progress: None,
        }
    }

    /// Report root-level progress on `bar`
    #[must_use]
    pub fn with_progress(mut self, bar: ProgressBar) -> Self {
        self.progress = Some(bar);
        self
    }

    #[must_use]
    pub const fn instance(&self) -> &'a WordleInstance {
        self.instance
    }

    #[must_use]
    pub const fn scores(&self) -> &ScoreCache {
        &self.scores
    }

    #[must_use]
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Find the tree with the smallest total
    #[must_use]
    pub fn solve(&self) -> SolveResult {
        self.solve_with_bound(usize::MAX)
    }

    /// Find the tree with the smallest total below `beta`
    #[must_use]
    pub fn solve_with_bound(&self, beta: usize) -> SolveResult {
        let start = Instant::now();
        let n_secrets = self.instance.n_secrets();
        if n_secrets == 0 {
            return SolveResult {
                tree: None,
                total: 0,
                average: 0.0,
                duration: start.elapsed(),
                cache_hits: 0,
                cache_misses: 0,
                cache_entries: 0,
            };
        }

        let candidates: Vec<usize> = (0..n_secrets).collect();
        let guesses: Vec<usize> = (0..self.instance.n_guesses()).collect();
        let mut cache = (self.config.memoize && !self.instance.hard_mode()).then(SubtreeCache::new);

        let tree = {
            let mut search = TreeSearch::new(self.instance, &self.scores, self.config);
            if let Some(cache) = cache.as_mut() {
                search = search.with_cache(cache);
            }
            if let Some(bar) = &self.progress {
                search = search.with_progress(bar);
            }
            search.optimize(&candidates, &guesses, 0, beta)
        };

        if let Some(bar) = &self.progress {
            bar.finish_and_clear();
        }

        let (cache_hits, cache_misses, cache_entries) = cache
            .as_ref()
            .map_or((0, 0, 0), |cache| (cache.hits(), cache.misses(), cache.len()));
        let total = tree.as_ref().map_or(0, |node| node.total());
        let average = if tree.is_some() {
            total as f64 / n_secrets as f64
        } else {
            0.0
        };

        let duration = start.elapsed();
        match &tree {
            Some(node) => info!(
                "Solved {n_secrets} secrets with {} first: total {total}, average {average:.4} in {duration:.2?}",
                self.instance.guesses()[node.guess()]
            ),
            None => info!("No tree beats bound {beta}"),
        }

        SolveResult {
            tree,
            total,
            average,
            duration,
            cache_hits,
            cache_misses,
            cache_entries,
        }
    }
}
