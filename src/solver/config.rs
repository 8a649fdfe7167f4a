//! Tunable search parameters

/// Parameters that bound the branch-and-bound search
///
/// `search_breadth` and `entropy_cutoff` trade runtime for optimality: the
/// defaults give a strong heuristic, [`SearchConfig::exhaustive`] tries every
/// allowed guess at every node and is optimal up to `max_depth`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    /// Maximum number of ranked guesses tried per node
    pub search_breadth: usize,
    /// Guesses whose entropy is below this fraction of the best are dropped
    pub entropy_cutoff: f64,
    /// Depth at which a node is reported infeasible
    pub max_depth: usize,
    /// Reuse solved subtrees for repeated candidate sets (normal mode only)
    pub memoize: bool,
    /// Nodes shallower than this log their progress at debug level
    pub log_depth: usize,
}

impl SearchConfig {
    pub const DEFAULT_BREADTH: usize = 50;
    pub const DEFAULT_ENTROPY_CUTOFF: f64 = 0.75;
    pub const DEFAULT_MAX_DEPTH: usize = 10;

    /// Create a config with the given breadth and cutoff
    #[must_use]
    pub const fn new(search_breadth: usize, entropy_cutoff: f64) -> Self {
        Self {
            search_breadth,
            entropy_cutoff,
            max_depth: Self::DEFAULT_MAX_DEPTH,
            memoize: true,
            log_depth: 1,
        }
    }

    /// Try every allowed guess at every node
    #[must_use]
    pub const fn exhaustive() -> Self {
        Self::new(usize::MAX, 0.0)
    }

    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub const fn with_memoize(mut self, memoize: bool) -> Self {
        self.memoize = memoize;
        self
    }

    #[must_use]
    pub const fn with_log_depth(mut self, log_depth: usize) -> Self {
        self.log_depth = log_depth;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BREADTH, Self::DEFAULT_ENTROPY_CUTOFF)
    }
}
