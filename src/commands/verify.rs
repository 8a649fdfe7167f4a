//! Replay a dumped tree against every secret
//!
//! Checks that the tree finds each secret, that its recorded statistics match
//! what the replay measures, and in hard mode that no guess ignores a revealed
//! letter.

use crate::core::{Pattern, Word, WordleInstance};
use crate::output::json::{NodeDump, TreeDump};
use crate::solver::hard_mode::Constraints;
use std::collections::BTreeMap;
use std::fmt;

/// Allowed gap between a recorded average and the replayed one
const AVERAGE_TOLERANCE: f64 = 1e-6;

/// Why a dumped tree was rejected
#[derive(Debug, Clone, PartialEq)]
pub enum VerifyError {
    /// The dump has no tree but the instance has secrets
    MissingTree,
    /// A node plays a word that is not an allowed guess
    UnknownGuess(String),
    /// A branch key is not a pattern
    BadPattern(String),
    /// Following the tree never reaches this secret
    Unsolved(String),
    /// A hard-mode guess contradicts feedback seen on its path
    HardModeViolation(String),
    /// A recorded number differs from the replay
    StatsMismatch {
        guess: String,
        field: &'static str,
        recorded: usize,
        actual: usize,
    },
    /// A recorded average differs from the replay
    AverageMismatch {
        guess: String,
        field: &'static str,
        recorded: f64,
        actual: f64,
    },
}

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTree => write!(f, "Dump has no tree"),
            Self::UnknownGuess(word) => write!(f, "Tree guesses '{word}', which is not allowed"),
            Self::BadPattern(key) => write!(f, "Branch key '{key}' is not a pattern"),
            Self::Unsolved(word) => write!(f, "Tree never solves '{word}'"),
            Self::HardModeViolation(word) => {
                write!(f, "Guess '{word}' ignores revealed letters")
            }
            Self::StatsMismatch {
                guess,
                field,
                recorded,
                actual,
            } => write!(
                f,
                "Node '{guess}' records {field} = {recorded}, replay gives {actual}"
            ),
            Self::AverageMismatch {
                guess,
                field,
                recorded,
                actual,
            } => write!(
                f,
                "Node '{guess}' records {field} = {recorded:.6}, replay gives {actual:.6}"
            ),
        }
    }
}

impl std::error::Error for VerifyError {}

/// What the replay measured
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyReport {
    pub n_secrets: usize,
    pub total: usize,
    pub worst_case: usize,
    /// Secrets per number of guesses needed
    pub distribution: BTreeMap<usize, usize>,
}

impl VerifyReport {
    #[must_use]
    pub fn average(&self) -> f64 {
        if self.n_secrets == 0 {
            0.0
        } else {
            self.total as f64 / self.n_secrets as f64
        }
    }
}

/// Statistics of a subtree as measured by the replay
#[derive(Debug, Clone, Copy)]
struct Measured {
    total: usize,
    best_case: usize,
    worst_case: usize,
}

struct Replay<'a> {
    instance: &'a WordleInstance,
    path: Vec<Constraints>,
    distribution: BTreeMap<usize, usize>,
}

impl<'a> Replay<'a> {
    /// Replay `secrets` from `node`, `depth` guesses in
    fn node(
        &mut self,
        node: &NodeDump,
        secrets: &[&Word],
        depth: usize,
    ) -> Result<Measured, VerifyError> {
        let guess = self.guess_word(&node.guess)?;
        if self.instance.hard_mode() && !self.path.iter().all(|c| c.allows(guess)) {
            return Err(VerifyError::HardModeViolation(node.guess.clone()));
        }
        let mut children = BTreeMap::new();
        for (key, child) in &node.branches {
            let pattern =
                Pattern::from_str(key).ok_or_else(|| VerifyError::BadPattern(key.clone()))?;
            children.insert(pattern, child);
        }

        let mut groups: BTreeMap<Pattern, Vec<&Word>> = BTreeMap::new();
        let mut solves_directly = false;
        for &secret in secrets {
            let pattern = Pattern::calculate(guess, secret);
            if pattern.is_perfect() {
                solves_directly = true;
                *self.distribution.entry(depth + 1).or_default() += 1;
            } else {
                groups.entry(pattern).or_default().push(secret);
            }
        }

        let mut measured = Measured {
            total: secrets.len(),
            best_case: if solves_directly { 1 } else { usize::MAX },
            worst_case: usize::from(solves_directly),
        };
        for (pattern, group) in &groups {
            let child = children
                .get(pattern)
                .ok_or_else(|| VerifyError::Unsolved(group[0].text().to_string()))?;
            self.path.push(Constraints::from_feedback(guess, *pattern));
            let child_measured = self.node(child, group, depth + 1);
            self.path.pop();
            let child_measured = child_measured?;
            measured.total += child_measured.total;
            measured.best_case = measured.best_case.min(1 + child_measured.best_case);
            measured.worst_case = measured.worst_case.max(1 + child_measured.worst_case);
        }

        let guess = node.guess.as_str();
        check(guess, "n_secrets", node.n_secrets, secrets.len())?;
        check(guess, "total", node.total, measured.total)?;
        check(guess, "best_case", node.best_case, measured.best_case)?;
        check(guess, "worst_case", node.worst_case, measured.worst_case)?;
        check_average(
            guess,
            "average_case",
            node.average_case,
            measured.total,
            secrets.len(),
        )?;
        Ok(measured)
    }

    fn guess_word(&self, text: &str) -> Result<&'a Word, VerifyError> {
        let instance = self.instance;
        instance
            .find_guess(text)
            .map(|index| &instance.guesses()[index])
            .ok_or_else(|| VerifyError::UnknownGuess(text.to_string()))
    }
}

fn check(
    guess: &str,
    field: &'static str,
    recorded: usize,
    actual: usize,
) -> Result<(), VerifyError> {
    if recorded == actual {
        Ok(())
    } else {
        Err(VerifyError::StatsMismatch {
            guess: guess.to_string(),
            field,
            recorded,
            actual,
        })
    }
}

fn check_average(
    guess: &str,
    field: &'static str,
    recorded: f64,
    total: usize,
    n_secrets: usize,
) -> Result<(), VerifyError> {
    let actual = if n_secrets == 0 {
        0.0
    } else {
        total as f64 / n_secrets as f64
    };
    if (recorded - actual).abs() <= AVERAGE_TOLERANCE {
        Ok(())
    } else {
        Err(VerifyError::AverageMismatch {
            guess: guess.to_string(),
            field,
            recorded,
            actual,
        })
    }
}

/// Replay every secret of `instance` through `dump`
///
/// # Errors
/// Returns the first `VerifyError` found.
pub fn verify_tree(instance: &WordleInstance, dump: &TreeDump) -> Result<VerifyReport, VerifyError> {
    let secrets: Vec<&Word> = instance.secrets().iter().collect();
    let mut replay = Replay {
        instance,
        path: Vec::new(),
        distribution: BTreeMap::new(),
    };

    let (total, worst_case) = match &dump.tree {
        Some(root) if !secrets.is_empty() => {
            let measured = replay.node(root, &secrets, 0)?;
            (measured.total, measured.worst_case)
        }
        None if !secrets.is_empty() => return Err(VerifyError::MissingTree),
        _ => (0, 0),
    };

    let root_guess = dump.tree.as_ref().map_or("", |root| root.guess.as_str());
    check(root_guess, "n_secrets", dump.n_secrets, secrets.len())?;
    check(root_guess, "total", dump.total, total)?;
    check_average(root_guess, "average", dump.average, total, secrets.len())?;

    Ok(VerifyReport {
        n_secrets: secrets.len(),
        total,
        worst_case,
        distribution: replay.distribution,
    })
}
