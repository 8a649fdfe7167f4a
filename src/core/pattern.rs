//! Wordle feedback pattern calculation and representation
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = Gray (letter not in word)
//! - 1 = Yellow (letter in word, wrong position)
//! - 2 = Green (letter in correct position)
//!
//! The pattern is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total.

use super::{WORD_LENGTH, Word};
use std::fmt;

const POWERS_OF_THREE: [u8; WORD_LENGTH] = [1, 3, 9, 27, 81];

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Letter does not occur (or all its occurrences are already credited)
    Absent,
    /// Letter occurs elsewhere in the secret
    Present,
    /// Letter is in the right position
    Exact,
}

impl Feedback {
    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Exact,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }

    /// Emoji square used when rendering patterns
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
        }
    }
}

/// Feedback pattern for a Wordle guess
///
/// Represents the colored feedback as a single byte value.
/// Value range: 0-242 (3^5 - 1 = 243 possible patterns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern(u8);

impl Pattern {
    /// Number of distinct patterns (3^5)
    pub const COUNT: usize = 243;

    /// All greens (perfect match)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Create a new pattern from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "Pattern value must be < 243");
        Self(value)
    }

    /// Get the raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Raw value as an index into per-pattern tables
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Calculate the pattern when `guess` is guessed and `secret` is the target
    ///
    /// Exact matches are credited first and consume their secret position.
    /// Remaining guess letters then claim the leftmost unconsumed equal letter
    /// of the secret, so a letter is never credited more often than it occurs.
    ///
    /// # Examples
    /// ```
    /// use wordle_tree::core::{Word, Pattern};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let secret = Word::new("slate").unwrap();
    /// let pattern = Pattern::calculate(&guess, &secret);
    ///
    /// // C(gray) R(gray) A(green) N(gray) E(green)
    /// // 0 + 0×3 + 2×9 + 0×27 + 2×81 = 180
    /// assert_eq!(pattern.value(), 180);
    /// ```
    #[must_use]
    // Allow: Index needed to compare guess[i] with secret[i] and consume secret[j]
    #[allow(clippy::needless_range_loop)]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        let guess = guess.chars();
        let secret = secret.chars();
        let mut consumed = [false; WORD_LENGTH];
        let mut pattern = 0u8;

        for i in 0..WORD_LENGTH {
            if guess[i] == secret[i] {
                pattern += 2 * POWERS_OF_THREE[i];
                consumed[i] = true;
            }
        }

        for i in 0..WORD_LENGTH {
            if guess[i] == secret[i] {
                continue;
            }
            if let Some(j) = (0..WORD_LENGTH).find(|&j| !consumed[j] && secret[j] == guess[i]) {
                pattern += POWERS_OF_THREE[i];
                consumed[j] = true;
            }
        }

        Self(pattern)
    }

    /// Feedback at one letter position (0-4)
    #[must_use]
    pub const fn feedback_at(self, position: usize) -> Feedback {
        Feedback::from_digit((self.0 / POWERS_OF_THREE[position]) % 3)
    }

    /// Per-position feedback, leftmost first
    #[must_use]
    pub fn feedbacks(self) -> [Feedback; WORD_LENGTH] {
        std::array::from_fn(|i| self.feedback_at(i))
    }

    /// Parse a pattern from a string like "GYGGY" or "🟩🟨🟩🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for green
    /// - 'Y'/'y'/🟨 for yellow
    /// - '-'/'_'/⬜/⬛ for gray
    ///
    /// # Examples
    /// ```
    /// use wordle_tree::core::Pattern;
    ///
    /// let p1 = Pattern::from_str("GY-GY").unwrap();
    /// let p2 = Pattern::from_str("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();

        if chars.len() != WORD_LENGTH {
            return None;
        }

        let mut pattern = 0u8;
        for (ch, power) in chars.into_iter().zip(POWERS_OF_THREE) {
            let digit = match ch {
                'G' | 'g' | '🟩' => 2,
                'Y' | 'y' | '🟨' => 1,
                '-' | '_' | '⬜' | '⬛' => 0,
                _ => return None,
            };
            pattern += digit * power;
        }

        Some(Self(pattern))
    }

    /// Convert pattern to emoji string
    ///
    /// # Examples
    /// ```
    /// use wordle_tree::core::Pattern;
    ///
    /// let p = Pattern::from_str("GY-GY").unwrap();
    /// assert_eq!(p.to_emoji(), "🟩🟨⬛🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.feedbacks().iter().map(|fb| fb.emoji()).collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(guess: &str, secret: &str) -> Pattern {
        Pattern::calculate(&Word::new(guess).unwrap(), &Word::new(secret).unwrap())
    }

    #[test]
    fn pattern_perfect_constant() {
        assert_eq!(Pattern::PERFECT.value(), 242);
        assert!(Pattern::PERFECT.is_perfect());
        assert_eq!(Pattern::PERFECT.feedbacks(), [Feedback::Exact; WORD_LENGTH]);
    }

    #[test]
    fn pattern_all_gray() {
        let pattern = score("abcde", "fghij");

        assert_eq!(pattern.value(), 0);
        assert_eq!(pattern.feedbacks(), [Feedback::Absent; WORD_LENGTH]);
    }

    #[test]
    fn perfect_iff_same_word() {
        let words = ["crane", "slate", "audio", "zzzzz", "aaaaa", "llama"];
        for guess in words {
            for secret in words {
                assert_eq!(score(guess, secret).is_perfect(), guess == secret);
            }
        }
    }

    #[test]
    fn pattern_duplicate_letters_green_takes_priority() {
        // S(yellow) P(gray) E(yellow) E(yellow) D(gray)
        let pattern = score("speed", "erase");

        assert_eq!(pattern.value(), 37);
        assert_eq!(
            pattern.feedbacks(),
            [
                Feedback::Present,
                Feedback::Absent,
                Feedback::Present,
                Feedback::Present,
                Feedback::Absent,
            ]
        );
    }

    #[test]
    fn pattern_duplicate_letters_complex() {
        // R(yellow) O(yellow) B(gray) O(green) T(gray)
        let pattern = score("robot", "floor");

        assert_eq!(pattern.value(), 58);
        assert_eq!(pattern, Pattern::from_str("YY-G-").unwrap());
    }

    #[test]
    fn repeated_letter_credit_bounded_by_secret() {
        // A(yellow) L(green) L(yellow) O(gray) T(gray)
        let pattern = score("allot", "llama");
        assert_eq!(pattern, Pattern::from_str("YGY--").unwrap());

        let secret = Word::new("llama").unwrap();
        let guess = Word::new("allot").unwrap();
        for letter in [b'a', b'l'] {
            let credited = (0..WORD_LENGTH)
                .filter(|&i| guess.char_at(i) == letter)
                .filter(|&i| pattern.feedback_at(i) != Feedback::Absent)
                .count();
            assert!(credited <= secret.count_of(letter));
        }
    }

    #[test]
    fn surplus_guess_letters_are_gray() {
        // Only one E in the secret: the exact one wins, the other is gray
        let pattern = score("eerie", "crane");
        assert_eq!(pattern.to_emoji(), "⬛⬛🟨⬛🟩");
    }

    #[test]
    fn scorer_is_deterministic() {
        assert_eq!(score("crane", "slate"), score("crane", "slate"));
        assert_eq!(score("crane", "slate").value(), 180);
    }

    #[test]
    fn pattern_from_str_valid() {
        let p1 = Pattern::from_str("GYG--").unwrap();
        let p2 = Pattern::from_str("🟩🟨🟩⬜⬜").unwrap();
        let p3 = Pattern::from_str("gyg__").unwrap();
        let p4 = Pattern::from_str("🟩🟨🟩⬛⬛").unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1, p4);
        assert_eq!(p1.value(), 23);
    }

    #[test]
    fn pattern_from_str_invalid() {
        assert!(Pattern::from_str("GYGGYX").is_none());
        assert!(Pattern::from_str("GYG").is_none());
        assert!(Pattern::from_str("GXGGY").is_none());
        assert!(Pattern::from_str("").is_none());
    }

    #[test]
    fn emoji_round_trip() {
        for value in [0u8, 1, 37, 133, 242] {
            let pattern = Pattern::new(value);
            assert_eq!(Pattern::from_str(&pattern.to_emoji()), Some(pattern));
            assert_eq!(pattern.to_string(), pattern.to_emoji());
        }
    }
}
