//! One validated problem instance: secrets, allowed guesses and the mode

use super::Word;
use std::fmt;

/// Error type for instances the search cannot run on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstanceError {
    /// No guess words were supplied
    NoGuesses,
    /// A secret cannot be guessed, so a lone candidate would be unsolvable
    SecretNotGuessable(String),
    /// The same secret appears twice
    DuplicateSecret(String),
}

impl fmt::Display for InstanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoGuesses => write!(f, "Guess list must not be empty"),
            Self::SecretNotGuessable(word) => {
                write!(f, "Secret '{word}' is missing from the guess list")
            }
            Self::DuplicateSecret(word) => write!(f, "Secret '{word}' is listed twice"),
        }
    }
}

impl std::error::Error for InstanceError {}

/// Immutable configuration for one optimization run
///
/// Secrets and guesses are addressed by their index in the lists given at
/// construction; every other component works on those indices.
#[derive(Debug, Clone)]
pub struct WordleInstance {
    secrets: Vec<Word>,
    guesses: Vec<Word>,
    hard_mode: bool,
    guess_of_secret: Vec<usize>,
    secret_of_guess: Vec<Option<usize>>,
}

impl WordleInstance {
    /// Build an instance, checking that every secret is also a guess
    ///
    /// # Errors
    /// Returns `InstanceError` if the guess list is empty, a secret does not
    /// appear in it, or a secret is repeated.
    pub fn new(
        secrets: Vec<Word>,
        guesses: Vec<Word>,
        hard_mode: bool,
    ) -> Result<Self, InstanceError> {
        if guesses.is_empty() {
            return Err(InstanceError::NoGuesses);
        }

        let mut secret_of_guess = vec![None; guesses.len()];
        let mut guess_of_secret = Vec::with_capacity(secrets.len());
        for (secret_index, secret) in secrets.iter().enumerate() {
            let guess_index = guesses
                .iter()
                .position(|guess| guess == secret)
                .ok_or_else(|| InstanceError::SecretNotGuessable(secret.text().to_string()))?;
            if secret_of_guess[guess_index].replace(secret_index).is_some() {
                return Err(InstanceError::DuplicateSecret(secret.text().to_string()));
            }
            guess_of_secret.push(guess_index);
        }

        Ok(Self {
            secrets,
            guesses,
            hard_mode,
            guess_of_secret,
            secret_of_guess,
        })
    }

    #[inline]
    #[must_use]
    pub fn secrets(&self) -> &[Word] {
        &self.secrets
    }

    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    #[inline]
    #[must_use]
    pub const fn hard_mode(&self) -> bool {
        self.hard_mode
    }

    #[inline]
    #[must_use]
    pub fn n_secrets(&self) -> usize {
        self.secrets.len()
    }

    #[inline]
    #[must_use]
    pub fn n_guesses(&self) -> usize {
        self.guesses.len()
    }

    /// Guess index that spells the given secret
    #[inline]
    #[must_use]
    pub fn guess_of_secret(&self, secret: usize) -> usize {
        self.guess_of_secret[secret]
    }

    /// Secret index spelled by the given guess, if it is a secret
    #[inline]
    #[must_use]
    pub fn secret_of_guess(&self, guess: usize) -> Option<usize> {
        self.secret_of_guess[guess]
    }

    /// Look up a guess index by its text
    #[must_use]
    pub fn find_guess(&self, text: &str) -> Option<usize> {
        self.guesses.iter().position(|guess| guess.text() == text)
    }
}
