//! Word lists for the optimizer
//!
//! Lists are read from files, one word per line, or taken from the embedded
//! sample.

mod embedded;
pub mod loader;

pub use embedded::{SAMPLE, SAMPLE_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_count_matches_const() {
        let words = loader::parse_words(SAMPLE).unwrap();
        assert_eq!(words.len(), SAMPLE_COUNT);
    }

    #[test]
    fn sample_is_sorted_and_distinct() {
        let words = loader::parse_words(SAMPLE).unwrap();
        assert!(words.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(words[0].text(), "aback");
        assert_eq!(words[SAMPLE_COUNT - 1].text(), "alibi");
    }
}
