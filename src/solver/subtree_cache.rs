//! Memo of solved subtrees keyed by candidate set
//!
//! Different guess paths often narrow the secrets to the same set. Once such
//! a set is solved its subtree is reused as is. Only valid when every node
//! may play every guess, so hard mode never uses it.

use super::tree::DecisionNode;
use rustc_hash::FxHashMap;
use std::rc::Rc;

/// Set of secret indices as a bitmap
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubtreeKey {
    bits: Box<[u64]>,
}

impl SubtreeKey {
    /// Key for `candidates` out of `n_secrets` secrets
    #[must_use]
    pub fn new(n_secrets: usize, candidates: &[usize]) -> Self {
        let mut bits = vec![0u64; n_secrets.div_ceil(64)].into_boxed_slice();
        for &secret in candidates {
            bits[secret / 64] |= 1u64 << (secret % 64);
        }
        Self { bits }
    }
}

/// Solved subtrees with hit/miss counters
#[derive(Debug, Default)]
pub struct SubtreeCache {
    entries: FxHashMap<SubtreeKey, Rc<DecisionNode>>,
    hits: usize,
    misses: usize,
}

impl SubtreeCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Solved subtree for `key`, counting the lookup
    pub fn get(&mut self, key: &SubtreeKey) -> Option<Rc<DecisionNode>> {
        let found = self.entries.get(key).cloned();
        if found.is_some() {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
        found
    }

    pub fn insert(&mut self, key: SubtreeKey, node: Rc<DecisionNode>) {
        self.entries.insert(key, node);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub const fn hits(&self) -> usize {
        self.hits
    }

    #[must_use]
    pub const fn misses(&self) -> usize {
        self.misses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn key_spans_several_words() {
        let key = SubtreeKey::new(130, &[0, 63, 64, 129]);
        assert_eq!(key.bits.len(), 3);
        assert_eq!(key.bits[0], 1 | (1 << 63));
        assert_eq!(key.bits[1], 1);
        assert_eq!(key.bits[2], 0b10);
        assert_ne!(SubtreeKey::new(130, &[0]), SubtreeKey::new(130, &[64]));
    }

    #[test]
    fn key_ignores_candidate_order() {
        assert_eq!(SubtreeKey::new(10, &[3, 1, 7]), SubtreeKey::new(10, &[7, 3, 1]));
        assert_ne!(SubtreeKey::new(10, &[3, 1]), SubtreeKey::new(10, &[3, 2]));
    }

    #[test]
    fn counts_hits_and_misses() {
        let mut cache = SubtreeCache::new();
        let key = SubtreeKey::new(4, &[2]);
        assert!(cache.is_empty());
        assert!(cache.get(&key).is_none());

        cache.insert(key.clone(), Rc::new(DecisionNode::leaf(2, 4, Duration::ZERO)));
        let node = cache.get(&key).unwrap();
        assert_eq!(node.guess(), 2);

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.misses(), 1);
    }
}
