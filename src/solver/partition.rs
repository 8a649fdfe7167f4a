//! Grouping of candidate secrets by the feedback a guess would produce

use super::ScoreCache;
use crate::core::Pattern;
use std::ops::Range;

/// Number of candidates per pattern, indexed by `Pattern::index`
pub type PatternCounts = [usize; Pattern::COUNT];

/// Count how many candidates fall into each pattern for `guess`
///
/// Cheaper than [`Partition::build`] when only the sizes are needed.
pub fn count_patterns(
    cache: &ScoreCache,
    guess: usize,
    candidates: &[usize],
    counts: &mut PatternCounts,
) {
    counts.fill(0);
    let row = cache.row(guess);
    for &secret in candidates {
        counts[row[secret].index()] += 1;
    }
}

/// Candidates of one node split by the pattern of a single guess
///
/// The grouped indices live in a caller-owned layout buffer; the partition
/// only records where each group starts and how large it is.
#[derive(Debug, Clone)]
pub struct Partition {
    sizes: PatternCounts,
    starts: PatternCounts,
    largest: usize,
    group_count: usize,
}

impl Partition {
    /// Bucket-sort `candidates` by pattern into `layout`
    ///
    /// The sort is stable: within a group, candidates keep their input order.
    ///
    /// # Panics
    /// Panics if `layout` is shorter than `candidates`.
    #[must_use]
    pub fn build(
        cache: &ScoreCache,
        guess: usize,
        candidates: &[usize],
        layout: &mut [usize],
    ) -> Self {
        let row = cache.row(guess);
        let mut sizes = [0; Pattern::COUNT];
        count_patterns(cache, guess, candidates, &mut sizes);

        let mut starts = [0; Pattern::COUNT];
        let mut offset = 0;
        for (start, &size) in starts.iter_mut().zip(&sizes) {
            *start = offset;
            offset += size;
        }

        let mut cursor = starts;
        for &secret in candidates {
            let slot = &mut cursor[row[secret].index()];
            layout[*slot] = secret;
            *slot += 1;
        }

        let largest = sizes.iter().copied().max().unwrap_or(0);
        let group_count = sizes
            .iter()
            .enumerate()
            .filter(|&(pattern, &size)| size > 0 && pattern != Pattern::PERFECT.index())
            .count();

        Self {
            sizes,
            starts,
            largest,
            group_count,
        }
    }

    /// Number of candidates in the group for `pattern`
    #[inline]
    #[must_use]
    pub const fn size(&self, pattern: Pattern) -> usize {
        self.sizes[pattern.index()]
    }

    /// Position of the group for `pattern` within the layout buffer
    #[inline]
    #[must_use]
    pub const fn range(&self, pattern: Pattern) -> Range<usize> {
        let start = self.starts[pattern.index()];
        start..start + self.sizes[pattern.index()]
    }

    /// 1 when the guess is itself a candidate, else 0
    #[inline]
    #[must_use]
    pub const fn perfect_size(&self) -> usize {
        self.size(Pattern::PERFECT)
    }

    /// Size of the largest group, the all-exact one included
    #[inline]
    #[must_use]
    pub const fn largest(&self) -> usize {
        self.largest
    }

    /// Non-empty groups, not counting the all-exact one
    #[inline]
    #[must_use]
    pub const fn group_count(&self) -> usize {
        self.group_count
    }

    /// Non-empty, non-terminal groups in pattern order
    pub fn groups(&self) -> impl Iterator<Item = (Pattern, Range<usize>)> + '_ {
        (0..Pattern::PERFECT.value())
            .map(Pattern::new)
            .filter(|&pattern| self.size(pattern) > 0)
            .map(|pattern| (pattern, self.range(pattern)))
    }

    /// Non-terminal groups, smallest first (ties in pattern order)
    #[must_use]
    pub fn groups_by_size(&self) -> Vec<(Pattern, Range<usize>)> {
        let mut groups: Vec<_> = self.groups().collect();
        groups.sort_by_key(|(_, range)| range.len());
        groups
    }
}
