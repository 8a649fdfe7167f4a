//! Guess narrowing for hard mode
//!
//! After a guess shows a pattern, later guesses must keep every green letter
//! in place and reuse every revealed letter at least as often as it was
//! revealed.

use crate::core::{Feedback, Pattern, WORD_LENGTH, Word};

/// Letters a pattern forces onto later guesses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraints {
    exact: [Option<u8>; WORD_LENGTH],
    included: Vec<u8>,
}

impl Constraints {
    /// Constraints revealed by `guess` showing `pattern`
    ///
    /// Green letters count as included too, so a green `e` plus a yellow `e`
    /// requires two `e`s.
    #[must_use]
    pub fn from_feedback(guess: &Word, pattern: Pattern) -> Self {
        let mut exact = [None; WORD_LENGTH];
        let mut included = Vec::with_capacity(WORD_LENGTH);

        for (position, feedback) in pattern.feedbacks().into_iter().enumerate() {
            let letter = guess.char_at(position);
            match feedback {
                Feedback::Exact => {
                    exact[position] = Some(letter);
                    included.push(letter);
                }
                Feedback::Present => included.push(letter),
                Feedback::Absent => {}
            }
        }

        Self { exact, included }
    }

    /// Whether `word` may still be played
    #[must_use]
    pub fn allows(&self, word: &Word) -> bool {
        let exact_ok = self
            .exact
            .iter()
            .zip(word.chars())
            .all(|(required, &letter)| required.is_none_or(|r| r == letter));

        exact_ok
            && self.included.iter().all(|&letter| {
                let required = self.included.iter().filter(|&&l| l == letter).count();
                word.count_of(letter) >= required
            })
    }
}

/// Narrow `allowed` to the guesses consistent with `guess` showing `pattern`
///
/// `allowed` is the parent's already-narrowed set, so constraints accumulate
/// along the path. Order is preserved.
#[must_use]
pub fn filter_guesses(
    words: &[Word],
    allowed: &[usize],
    guess: usize,
    pattern: Pattern,
) -> Vec<usize> {
    let constraints = Constraints::from_feedback(&words[guess], pattern);
    allowed
        .iter()
        .copied()
        .filter(|&candidate| constraints.allows(&words[candidate]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn green_letters_stay_in_place() {
        let guess = word("crane");
        let pattern = Pattern::calculate(&guess, &word("slate"));
        let constraints = Constraints::from_feedback(&guess, pattern);

        assert!(constraints.allows(&word("slate")));
        assert!(constraints.allows(&word("grate")));
        // A moved away from position 2
        assert!(!constraints.allows(&word("alert")));
    }

    #[test]
    fn yellow_letters_must_reappear() {
        let guess = word("robot");
        // R(yellow) O(yellow) B(gray) O(green) T(gray)
        let pattern = Pattern::calculate(&guess, &word("floor"));
        let constraints = Constraints::from_feedback(&guess, pattern);

        assert!(constraints.allows(&word("floor")));
        // Needs an o at position 3, a second o and an r
        assert!(!constraints.allows(&word("hover")));
        assert!(constraints.allows(&word("rooox")));
        assert!(!constraints.allows(&word("zzzoo")));
    }

    #[test]
    fn all_gray_allows_anything() {
        let guess = word("abcde");
        let constraints = Constraints::from_feedback(&guess, Pattern::new(0));
        assert!(constraints.allows(&word("abcde")));
        assert!(constraints.allows(&word("zzzzz")));
    }

    #[test]
    fn filter_keeps_order_and_consistency() {
        let words = words_from_slice(&["crane", "slate", "grate", "alert", "trace", "skate"]);
        let pattern = Pattern::calculate(&words[0], &words[1]);
        let allowed: Vec<usize> = (0..words.len()).collect();

        let filtered = filter_guesses(&words, &allowed, 0, pattern);
        assert_eq!(filtered, vec![0, 1, 2, 4, 5]);

        // Every survivor shows no contradiction with the revealed letters
        let constraints = Constraints::from_feedback(&words[0], pattern);
        assert!(filtered.iter().all(|&i| constraints.allows(&words[i])));
    }

    #[test]
    fn constraints_accumulate_through_parent_set() {
        let words = words_from_slice(&["crane", "slate", "grate", "skate", "stale"]);
        let allowed: Vec<usize> = (0..words.len()).collect();

        let first = filter_guesses(&words, &allowed, 0, Pattern::calculate(&words[0], &words[3]));
        let second = filter_guesses(&words, &first, 1, Pattern::calculate(&words[1], &words[3]));

        assert!(second.iter().all(|i| first.contains(i)));
        assert!(second.contains(&3));
    }
}
