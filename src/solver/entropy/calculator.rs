//! Shannon entropy of a guess's partition
//!
//! Given the group sizes a guess produces, computes how much information it
//! reveals about the candidate set.

/// Unnormalized entropy of a partition
///
/// Returns `Σ size · log₂(n / size)` over non-empty groups, where `n` is the
/// total. Dividing by `n` gives Shannon entropy in bits.
///
/// # Examples
/// ```
/// use wordle_tree::solver::entropy::unnormalized_entropy;
///
/// // Four equal groups of one: 4 × log2(4) = 8
/// let entropy = unnormalized_entropy(&[1, 1, 1, 1], 4);
/// assert!((entropy - 8.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn unnormalized_entropy(group_sizes: &[usize], n_candidates: usize) -> f64 {
    let total = n_candidates as f64;
    group_sizes
        .iter()
        .filter(|&&size| size > 0)
        .map(|&size| {
            let size = size as f64;
            size * (total / size).log2()
        })
        .sum()
}

/// Calculate Shannon entropy from a distribution of group sizes
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 for certain outcome (one group)
/// - Maximized for uniform distribution
/// - Always in range [0, log₂(k)] for k groups
#[must_use]
pub fn shannon_entropy(group_sizes: &[usize]) -> f64 {
    let total: usize = group_sizes.iter().sum();

    if total == 0 {
        return 0.0;
    }

    unnormalized_entropy(group_sizes, total) / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shannon_entropy_uniform_distribution() {
        // 4 groups, each of one = log2(4) = 2 bits
        let entropy = shannon_entropy(&[1, 1, 1, 1]);
        assert!((entropy - 2.0).abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_certain_outcome() {
        let entropy = shannon_entropy(&[10]);
        assert!(entropy.abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_skewed_distribution() {
        let uniform = shannon_entropy(&[25, 25, 25, 25]);
        let skewed = shannon_entropy(&[97, 1, 1, 1]);
        assert!(uniform > skewed);
    }

    #[test]
    fn shannon_entropy_bounds() {
        let sizes = [10, 20, 30];
        let entropy = shannon_entropy(&sizes);
        assert!(entropy >= 0.0);
        assert!(entropy <= (sizes.len() as f64).log2());
    }

    #[test]
    fn shannon_entropy_empty() {
        assert!(shannon_entropy(&[]).abs() < f64::EPSILON);
        assert!(shannon_entropy(&[0, 0]).abs() < f64::EPSILON);
    }

    #[test]
    fn unnormalized_ignores_empty_groups() {
        let with_gaps = unnormalized_entropy(&[0, 2, 0, 2], 4);
        let without = unnormalized_entropy(&[2, 2], 4);
        assert!((with_gaps - without).abs() < f64::EPSILON);
        assert!((without - 4.0).abs() < 1e-9);
    }
}
