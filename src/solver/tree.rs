//! Decision tree produced by the search
//!
//! Nodes are immutable once built. Children are shared through `Rc` because
//! the subtree cache hands the same solved subtree to every parent that
//! reaches its candidate set.

use super::ScoreCache;
use crate::core::Pattern;
use std::rc::Rc;
use std::time::Duration;

/// Summary of one subtree
#[derive(Debug, Clone)]
pub struct NodeStats {
    /// Secrets still possible at this node
    pub n_secrets: usize,
    /// Guesses allowed at this node
    pub n_guesses: usize,
    /// Guesses needed to solve every secret of this node, summed
    pub total: usize,
    /// Fewest guesses any secret of this node needs
    pub best_case: usize,
    /// Most guesses any secret of this node needs
    pub worst_case: usize,
    /// `total / n_secrets`
    pub average_case: f64,
    /// Time spent solving this node
    pub duration: Duration,
}

/// Edge from a node to the subtree played after seeing `pattern`
#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    pub pattern: Pattern,
    pub node: Rc<DecisionNode>,
}

/// One guess of the strategy and what to do after each possible feedback
///
/// The all-exact feedback ends the game and has no branch.
#[derive(Debug, Clone)]
pub struct DecisionNode {
    guess: usize,
    branches: Vec<Branch>,
    stats: NodeStats,
}

impl DecisionNode {
    /// Terminal node: the only remaining secret is guessed directly
    #[must_use]
    pub const fn leaf(guess: usize, n_guesses: usize, duration: Duration) -> Self {
        Self {
            guess,
            branches: Vec::new(),
            stats: NodeStats {
                n_secrets: 1,
                n_guesses,
                total: 1,
                best_case: 1,
                worst_case: 1,
                average_case: 1.0,
                duration,
            },
        }
    }

    /// Node that plays `guess` and continues with `branches`
    ///
    /// `solves_directly` is true when the guess is one of this node's
    /// candidates. Branches are stored in pattern order.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn internal(
        guess: usize,
        solves_directly: bool,
        n_secrets: usize,
        n_guesses: usize,
        total: usize,
        mut branches: Vec<Branch>,
        duration: Duration,
    ) -> Self {
        branches.sort_by_key(|branch| branch.pattern);

        let direct = usize::from(solves_directly);
        let best_case = if solves_directly {
            1
        } else {
            branches
                .iter()
                .map(|branch| 1 + branch.node.stats.best_case)
                .min()
                .unwrap_or(1)
        };
        let worst_case = branches
            .iter()
            .map(|branch| 1 + branch.node.stats.worst_case)
            .max()
            .unwrap_or(0)
            .max(direct);

        Self {
            guess,
            branches,
            stats: NodeStats {
                n_secrets,
                n_guesses,
                total,
                best_case,
                worst_case,
                average_case: total as f64 / n_secrets as f64,
                duration,
            },
        }
    }

    /// Index of the guess played at this node
    #[inline]
    #[must_use]
    pub const fn guess(&self) -> usize {
        self.guess
    }

    #[inline]
    #[must_use]
    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    #[inline]
    #[must_use]
    pub const fn stats(&self) -> &NodeStats {
        &self.stats
    }

    #[inline]
    #[must_use]
    pub const fn total(&self) -> usize {
        self.stats.total
    }

    #[inline]
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.branches.is_empty()
    }

    /// Subtree played after `pattern`, if any
    #[must_use]
    pub fn child(&self, pattern: Pattern) -> Option<&Rc<Self>> {
        self.branches
            .binary_search_by_key(&pattern, |branch| branch.pattern)
            .ok()
            .map(|i| &self.branches[i].node)
    }

    /// Number of nodes, counting shared subtrees once per parent
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self
            .branches
            .iter()
            .map(|branch| branch.node.node_count())
            .sum::<usize>()
    }

    /// Guesses this strategy needs for `secret`, or `None` if it never
    /// finds it
    #[must_use]
    pub fn play(&self, cache: &ScoreCache, secret: usize) -> Option<usize> {
        let mut node = self;
        let mut turns = 1;
        loop {
            let pattern = cache.get(node.guess, secret);
            if pattern.is_perfect() {
                return Some(turns);
            }
            node = node.child(pattern)?.as_ref();
            turns += 1;
        }
    }
}

/// Equality compares the strategy and its counts, not timing
impl PartialEq for DecisionNode {
    fn eq(&self, other: &Self) -> bool {
        self.guess == other.guess
            && self.branches == other.branches
            && self.stats.n_secrets == other.stats.n_secrets
            && self.stats.n_guesses == other.stats.n_guesses
            && self.stats.total == other.stats.total
            && self.stats.best_case == other.stats.best_case
            && self.stats.worst_case == other.stats.worst_case
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordleInstance;
    use crate::wordlists::loader::words_from_slice;

    fn leaf(guess: usize) -> Rc<DecisionNode> {
        Rc::new(DecisionNode::leaf(guess, 4, Duration::ZERO))
    }

    #[test]
    fn leaf_stats() {
        let node = leaf(3);
        assert!(node.is_leaf());
        assert_eq!(node.total(), 1);
        assert_eq!(node.stats().best_case, 1);
        assert_eq!(node.stats().worst_case, 1);
        assert!((node.stats().average_case - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn internal_stats_and_branch_order() {
        let branches = vec![
            Branch {
                pattern: Pattern::new(50),
                node: leaf(2),
            },
            Branch {
                pattern: Pattern::new(10),
                node: leaf(1),
            },
        ];
        let node = DecisionNode::internal(0, true, 3, 4, 5, branches, Duration::ZERO);

        assert_eq!(node.branches()[0].pattern, Pattern::new(10));
        assert_eq!(node.stats().best_case, 1);
        assert_eq!(node.stats().worst_case, 2);
        assert!((node.stats().average_case - 5.0 / 3.0).abs() < 1e-9);
        assert_eq!(node.child(Pattern::new(50)).unwrap().guess(), 2);
        assert!(node.child(Pattern::new(11)).is_none());
        assert_eq!(node.node_count(), 3);
    }

    #[test]
    fn best_case_without_direct_hit() {
        let branches = vec![Branch {
            pattern: Pattern::new(1),
            node: leaf(1),
        }];
        let node = DecisionNode::internal(0, false, 1, 2, 2, branches, Duration::ZERO);
        assert_eq!(node.stats().best_case, 2);
        assert_eq!(node.stats().worst_case, 2);
    }

    #[test]
    fn equality_ignores_duration() {
        let a = DecisionNode::leaf(1, 4, Duration::ZERO);
        let b = DecisionNode::leaf(1, 4, Duration::from_secs(3));
        assert_eq!(a, b);
        assert_ne!(a, DecisionNode::leaf(2, 4, Duration::ZERO));
    }

    #[test]
    fn play_walks_the_tree() {
        let words = words_from_slice(&["slate", "crate", "plate"]);
        let instance = WordleInstance::new(words.clone(), words, false).unwrap();
        let cache = ScoreCache::new(&instance);

        // "slate" first, then whichever word remains
        let branches = vec![
            Branch {
                pattern: cache.get(0, 1),
                node: leaf(1),
            },
            Branch {
                pattern: cache.get(0, 2),
                node: leaf(2),
            },
        ];
        let root = DecisionNode::internal(0, true, 3, 3, 5, branches, Duration::ZERO);

        assert_eq!(root.play(&cache, 0), Some(1));
        assert_eq!(root.play(&cache, 1), Some(2));
        assert_eq!(root.play(&cache, 2), Some(2));
    }
}
