//! Word list loading utilities
//!
//! Lists hold one word per line. Surrounding whitespace and blank lines are
//! ignored; anything else that is not a valid word is an error.

use crate::core::{Word, WordError};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error type for word lists that cannot be used
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read
    Io { path: PathBuf, source: io::Error },
    /// A line holds something other than a valid word (lines count from 1)
    InvalidWord {
        line: usize,
        text: String,
        source: WordError,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, .. } => write!(f, "Cannot read word list {}", path.display()),
            Self::InvalidWord { line, text, source } => {
                write!(f, "Line {line}: '{text}' is not a valid word: {source}")
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::InvalidWord { source, .. } => Some(source),
        }
    }
}

/// Parse a word list held in memory
///
/// # Errors
/// Returns `LoadError::InvalidWord` for the first line that is neither blank
/// nor a valid word.
///
/// # Examples
/// ```
/// use wordle_tree::wordlists::loader::parse_words;
///
/// let words = parse_words("crane\n\n  slate \n").unwrap();
/// assert_eq!(words.len(), 2);
/// assert!(parse_words("crane\ncranes\n").is_err());
/// ```
pub fn parse_words(content: &str) -> Result<Vec<Word>, LoadError> {
    content
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, text)| !text.is_empty())
        .map(|(line, text)| {
            Word::new(text).map_err(|source| LoadError::InvalidWord {
                line,
                text: text.to_string(),
                source,
            })
        })
        .collect()
}

/// Load words from a file
///
/// # Errors
/// Returns `LoadError::Io` if the file cannot be read and
/// `LoadError::InvalidWord` if a line is not a valid word.
///
/// # Examples
/// ```no_run
/// use wordle_tree::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/sample_words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_words(&content)
}

/// Keep only the first `limit` words, or all of them for `None`
#[must_use]
pub fn take_prefix(mut words: Vec<Word>, limit: Option<usize>) -> Vec<Word> {
    if let Some(limit) = limit {
        words.truncate(limit);
    }
    words
}

/// Convert a string slice to words, skipping invalid entries
///
/// # Examples
/// ```
/// use wordle_tree::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "toolong", "slate"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "slate", "irate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "slate"]);
        assert_eq!(words.len(), 2);
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn parse_skips_blank_lines_and_trims() {
        let words = parse_words("\ncrane\n   \n\tSLATE  \r\n").unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn parse_reports_line_of_invalid_word() {
        let err = parse_words("crane\n\nsl4te\nirate\n").unwrap_err();
        match err {
            LoadError::InvalidWord { line, text, source } => {
                assert_eq!(line, 3);
                assert_eq!(text, "sl4te");
                assert_eq!(source, WordError::InvalidCharacters);
            }
            LoadError::Io { .. } => panic!("expected an invalid word"),
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_from_file("no/such/list.txt").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("no/such/list.txt"));
    }

    #[test]
    fn prefix_limit() {
        let words = words_from_slice(&["crane", "slate", "irate"]);
        assert_eq!(take_prefix(words.clone(), Some(2)).len(), 2);
        assert_eq!(take_prefix(words.clone(), Some(10)).len(), 3);
        assert_eq!(take_prefix(words, None).len(), 3);
    }
}
