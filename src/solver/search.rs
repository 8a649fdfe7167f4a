//! Branch-and-bound search for the decision tree with the smallest total
//!
//! A node's total is the number of guesses needed to solve each of its
//! secrets, summed. For a guess `g` over `n` candidates:
//!
//! ```text
//! total(g) = 2n - |exact group| + Σ (child.total - group size)
//! ```
//!
//! so `2n - 1` is a floor for any node and `2n - |exact group|` a floor for a
//! single guess. `beta` is the best total seen so far; anything that cannot
//! beat it is abandoned.

use super::entropy::{Ranking, rank_guesses};
use super::hard_mode::filter_guesses;
use super::partition::Partition;
use super::subtree_cache::{SubtreeCache, SubtreeKey};
use super::tree::{Branch, DecisionNode};
use super::{ScoreCache, SearchConfig};
use crate::core::WordleInstance;
use indicatif::ProgressBar;
use log::{debug, trace};
use std::borrow::Cow;
use std::mem;
use std::rc::Rc;
use std::time::Instant;

/// State of one search run
pub struct TreeSearch<'a> {
    instance: &'a WordleInstance,
    scores: &'a ScoreCache,
    config: SearchConfig,
    cache: Option<&'a mut SubtreeCache>,
    progress: Option<&'a ProgressBar>,
    /// One layout buffer per depth
    scratch: Vec<Vec<usize>>,
}

impl<'a> TreeSearch<'a> {
    #[must_use]
    pub const fn new(
        instance: &'a WordleInstance,
        scores: &'a ScoreCache,
        config: SearchConfig,
    ) -> Self {
        Self {
            instance,
            scores,
            config,
            cache: None,
            progress: None,
            scratch: Vec::new(),
        }
    }

    /// Reuse solved subtrees through `cache`
    ///
    /// Ignored in hard mode, where the allowed guesses depend on the path.
    #[must_use]
    pub fn with_cache(mut self, cache: &'a mut SubtreeCache) -> Self {
        if !self.instance.hard_mode() {
            self.cache = Some(cache);
        }
        self
    }

    /// Advance `bar` once per guess tried at the root
    #[must_use]
    pub const fn with_progress(mut self, bar: &'a ProgressBar) -> Self {
        self.progress = Some(bar);
        self
    }

    /// Best subtree for `candidates` whose total is below `beta`
    ///
    /// `guesses` is the set allowed at this node. Returns `None` when no
    /// strategy within the depth limit beats `beta`.
    pub fn optimize(
        &mut self,
        candidates: &[usize],
        guesses: &[usize],
        depth: usize,
        beta: usize,
    ) -> Option<Rc<DecisionNode>> {
        let n = candidates.len();
        if n == 0 || depth >= self.config.max_depth || beta <= 2 * n - 1 {
            return None;
        }

        let start = Instant::now();
        if n == 1 {
            let guess = self.instance.guess_of_secret(candidates[0]);
            return Some(Rc::new(DecisionNode::leaf(
                guess,
                guesses.len(),
                start.elapsed(),
            )));
        }

        let key = match self.cache.as_deref_mut() {
            Some(cache) if n > 2 => {
                let key = SubtreeKey::new(self.scores.n_secrets(), candidates);
                if let Some(node) = cache.get(&key) {
                    // Solved under another depth limit; reuse only if it fits this one
                    if depth + node.stats().worst_case <= self.config.max_depth {
                        return (node.total() < beta).then_some(node);
                    }
                    None
                } else {
                    Some(key)
                }
            }
            _ => None,
        };

        let plan = self.plan(candidates, guesses, depth);
        if depth == 0 {
            if let Some(bar) = self.progress {
                bar.set_length(plan.len() as u64);
            }
        }

        let mut layout = self.take_layout(depth, n);
        let best = self.search_guesses(&plan, candidates, guesses, &mut layout, depth, beta);
        self.scratch[depth] = layout;

        let (guess, total, branches) = best?;
        let solves_directly = candidates
            .iter()
            .any(|&secret| self.scores.get(guess, secret).is_perfect());
        let node = Rc::new(DecisionNode::internal(
            guess,
            solves_directly,
            n,
            guesses.len(),
            total,
            branches,
            start.elapsed(),
        ));

        if let (Some(cache), Some(key)) = (self.cache.as_deref_mut(), key) {
            cache.insert(key, Rc::clone(&node));
        }
        Some(node)
    }

    /// Guesses to try at a node, best first
    fn plan(&self, candidates: &[usize], guesses: &[usize], depth: usize) -> Vec<usize> {
        if candidates.len() == 2 {
            return vec![self.instance.guess_of_secret(candidates[0])];
        }
        match rank_guesses(self.scores, candidates, guesses, &self.config) {
            Ranking::Shortcut(guess) => vec![guess],
            Ranking::Ordered(ranked) => {
                if let Some(top) = ranked.first().filter(|_| depth < self.config.log_depth) {
                    debug!(
                        "depth {depth}: {} candidates, {} guesses ranked, best {} at {:.3} bits",
                        candidates.len(),
                        ranked.len(),
                        self.instance.guesses()[top.guess],
                        top.bits(candidates.len())
                    );
                }
                ranked.into_iter().map(|r| r.guess).collect()
            }
        }
    }

    fn search_guesses(
        &mut self,
        plan: &[usize],
        candidates: &[usize],
        guesses: &[usize],
        layout: &mut [usize],
        depth: usize,
        mut beta: usize,
    ) -> Option<(usize, usize, Vec<Branch>)> {
        let n = candidates.len();
        let floor = 2 * n - 1;
        let mut best = None;

        for (i, &guess) in plan.iter().enumerate() {
            if beta <= floor {
                break;
            }
            if depth < self.config.log_depth {
                debug!(
                    "depth {depth}: testing {} ({}/{}), bound {beta}",
                    self.instance.guesses()[guess],
                    i + 1,
                    plan.len()
                );
            }

            if let Some((total, branches)) =
                self.evaluate(guess, candidates, guesses, layout, depth, beta)
            {
                if depth < self.config.log_depth {
                    debug!(
                        "depth {depth}: {} improves bound to {total}",
                        self.instance.guesses()[guess]
                    );
                }
                beta = total;
                best = Some((guess, total, branches));
            }

            if depth == 0 {
                if let Some(bar) = self.progress {
                    bar.inc(1);
                }
            }
        }

        best
    }

    /// Total and branches of `guess`, if it beats `beta`
    fn evaluate(
        &mut self,
        guess: usize,
        candidates: &[usize],
        guesses: &[usize],
        layout: &mut [usize],
        depth: usize,
        beta: usize,
    ) -> Option<(usize, Vec<Branch>)> {
        let n = candidates.len();
        let partition = Partition::build(self.scores, guess, candidates, layout);

        let mut total = 2 * n - partition.perfect_size();
        if total >= beta || partition.largest() == n {
            return None;
        }

        let mut branches = Vec::with_capacity(partition.group_count());
        for (pattern, range) in partition.groups_by_size() {
            let size = range.len();
            let allowed: Cow<'_, [usize]> = if self.instance.hard_mode() {
                Cow::Owned(filter_guesses(
                    self.instance.guesses(),
                    guesses,
                    guess,
                    pattern,
                ))
            } else {
                Cow::Borrowed(guesses)
            };

            let child = self.optimize(&layout[range], &allowed, depth + 1, beta - total + size)?;
            total += child.total() - size;
            if total >= beta {
                trace!("depth {depth}: guess {guess} cut at {total}");
                return None;
            }
            branches.push(Branch {
                pattern,
                node: child,
            });
        }

        Some((total, branches))
    }

    fn take_layout(&mut self, depth: usize, n: usize) -> Vec<usize> {
        if self.scratch.len() <= depth {
            self.scratch.resize_with(depth + 1, Vec::new);
        }
        let mut layout = mem::take(&mut self.scratch[depth]);
        if layout.len() < n {
            layout.resize(n, 0);
        }
        layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn instance(secrets: &[&str], guesses: &[&str], hard_mode: bool) -> WordleInstance {
        WordleInstance::new(words_from_slice(secrets), words_from_slice(guesses), hard_mode)
            .unwrap()
    }

    fn run(instance: &WordleInstance, config: SearchConfig, beta: usize) -> Option<Rc<DecisionNode>> {
        let scores = ScoreCache::new(instance);
        let candidates: Vec<usize> = (0..instance.n_secrets()).collect();
        let guesses: Vec<usize> = (0..instance.n_guesses()).collect();
        let mut search = TreeSearch::new(instance, &scores, config);
        search.optimize(&candidates, &guesses, 0, beta)
    }

    #[test]
    fn single_secret_is_a_leaf() {
        let inst = instance(&["crane"], &["slate", "crane"], false);
        let node = run(&inst, SearchConfig::default(), usize::MAX).unwrap();
        assert!(node.is_leaf());
        assert_eq!(node.guess(), 1);
        assert_eq!(node.total(), 1);
    }

    #[test]
    fn two_secrets_guess_the_first() {
        let inst = instance(&["crane", "slate"], &["crane", "slate"], false);
        let node = run(&inst, SearchConfig::default(), usize::MAX).unwrap();
        assert_eq!(node.guess(), 0);
        assert_eq!(node.total(), 3);
        assert_eq!(node.branches().len(), 1);
    }

    #[test]
    fn bound_at_floor_is_infeasible() {
        let inst = instance(&["crane", "slate"], &["crane", "slate"], false);
        assert!(run(&inst, SearchConfig::default(), 3).is_none());
        assert!(run(&inst, SearchConfig::default(), 4).is_some());
    }

    #[test]
    fn depth_limit_makes_search_infeasible() {
        let inst = instance(&["crane", "slate"], &["crane", "slate"], false);
        let shallow = SearchConfig::default().with_max_depth(1);
        assert!(run(&inst, shallow, usize::MAX).is_none());
        let zero = SearchConfig::default().with_max_depth(0);
        let single = instance(&["crane"], &["crane"], false);
        assert!(run(&single, zero, usize::MAX).is_none());
    }

    #[test]
    fn singleton_split_reaches_the_floor() {
        // "slate" tells the other two apart
        let inst = instance(&["slate", "crate", "plate"], &["slate", "crate", "plate"], false);
        let node = run(&inst, SearchConfig::default(), usize::MAX).unwrap();
        assert_eq!(node.guess(), 0);
        assert_eq!(node.total(), 5);
        assert_eq!(node.stats().worst_case, 2);
    }

    #[test]
    fn non_candidate_guess_when_cheaper() {
        // Any candidate guess leaves a pair; "cpzzz" splits all three
        let inst = instance(
            &["grate", "crate", "prate"],
            &["grate", "crate", "prate", "cpzzz"],
            false,
        );
        let node = run(&inst, SearchConfig::exhaustive(), usize::MAX).unwrap();
        assert_eq!(node.total(), 6);
        assert_eq!(node.stats().best_case, 2);
    }

    #[test]
    fn reuses_scratch_across_depths() {
        let words = ["grate", "crate", "prate", "irate", "orate", "brake"];
        let inst = instance(&words, &words, false);
        let scores = ScoreCache::new(&inst);
        let all: Vec<usize> = (0..words.len()).collect();
        let mut search = TreeSearch::new(&inst, &scores, SearchConfig::exhaustive());

        let first = search.optimize(&all, &all, 0, usize::MAX).unwrap();
        let second = search.optimize(&all, &all, 0, usize::MAX).unwrap();
        assert_eq!(first, second);
    }
}
