//! Tree building command
//!
//! Runs the optimizer on an instance and summarizes the tree it finds.

use crate::core::{Pattern, WordleInstance};
use crate::solver::{DecisionNode, SearchConfig, SolveResult, Solver};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;

/// Result of building a tree
pub struct SolveSummary {
    pub result: SolveResult,
    pub first_guess: Option<String>,
    /// Secrets per number of guesses needed
    pub distribution: BTreeMap<usize, usize>,
    pub node_count: usize,
}

/// A single guess on the way to one secret
#[derive(Debug, Clone, PartialEq)]
pub struct TraceStep {
    pub word: String,
    pub pattern: Pattern,
    pub candidates_before: usize,
}

fn root_progress() -> ProgressBar {
    let bar = ProgressBar::new(0);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} root guesses ({elapsed})")
    {
        bar.set_style(style.progress_chars("█▓▒░"));
    }
    bar
}

/// Build the tree for `instance`
///
/// With `show_progress`, a bar advances once per guess tried at the root.
#[must_use]
pub fn build_tree(instance: &WordleInstance, config: SearchConfig, show_progress: bool) -> SolveSummary {
    let mut solver = Solver::new(instance, config);
    if show_progress {
        solver = solver.with_progress(root_progress());
    }
    let result = solver.solve();

    let mut distribution = BTreeMap::new();
    if let Some(tree) = &result.tree {
        for secret in 0..instance.n_secrets() {
            if let Some(turns) = tree.play(solver.scores(), secret) {
                *distribution.entry(turns).or_insert(0) += 1;
            }
        }
    }

    SolveSummary {
        first_guess: result
            .tree
            .as_ref()
            .map(|tree| instance.guesses()[tree.guess()].text().to_string()),
        node_count: result.tree.as_ref().map_or(0, |tree| tree.node_count()),
        distribution,
        result,
    }
}

/// Guesses the tree plays for `secret`, or `None` if it is not a secret the
/// tree reaches
#[must_use]
pub fn trace_secret(
    instance: &WordleInstance,
    tree: &DecisionNode,
    secret: &str,
) -> Option<Vec<TraceStep>> {
    let secret = instance.secrets().iter().find(|w| w.text() == secret)?;

    let mut steps = Vec::new();
    let mut node = tree;
    loop {
        let guess = &instance.guesses()[node.guess()];
        let pattern = Pattern::calculate(guess, secret);
        steps.push(TraceStep {
            word: guess.text().to_string(),
            pattern,
            candidates_before: node.stats().n_secrets,
        });
        if pattern.is_perfect() {
            return Some(steps);
        }
        node = node.child(pattern)?.as_ref();
    }
}
