//! JSON form of a solved tree
//!
//! Guesses are written as words and branches are keyed by the emoji form of
//! their pattern, so a dump can be read back and replayed without the word
//! lists' index order.

use crate::core::WordleInstance;
use crate::solver::{DecisionNode, SolveResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

/// One node of a dumped tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDump {
    pub guess: String,
    pub n_secrets: usize,
    pub n_guesses: usize,
    pub total: usize,
    pub best_case: usize,
    pub worst_case: usize,
    pub average_case: f64,
    /// Seconds
    pub duration: f64,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub branches: BTreeMap<String, NodeDump>,
}

impl NodeDump {
    #[must_use]
    pub fn from_node(instance: &WordleInstance, node: &DecisionNode) -> Self {
        let stats = node.stats();
        Self {
            guess: instance.guesses()[node.guess()].text().to_string(),
            n_secrets: stats.n_secrets,
            n_guesses: stats.n_guesses,
            total: stats.total,
            best_case: stats.best_case,
            worst_case: stats.worst_case,
            average_case: stats.average_case,
            duration: stats.duration.as_secs_f64(),
            branches: node
                .branches()
                .iter()
                .map(|branch| {
                    (
                        branch.pattern.to_emoji(),
                        Self::from_node(instance, &branch.node),
                    )
                })
                .collect(),
        }
    }
}

/// A whole run: instance summary plus the tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeDump {
    pub hard_mode: bool,
    pub n_secrets: usize,
    pub n_guesses: usize,
    pub total: usize,
    pub average: f64,
    /// Seconds
    pub duration: f64,
    pub tree: Option<NodeDump>,
}

impl TreeDump {
    #[must_use]
    pub fn new(instance: &WordleInstance, result: &SolveResult) -> Self {
        Self {
            hard_mode: instance.hard_mode(),
            n_secrets: instance.n_secrets(),
            n_guesses: instance.n_guesses(),
            total: result.total,
            average: result.average,
            duration: result.duration.as_secs_f64(),
            tree: result
                .tree
                .as_deref()
                .map(|node| NodeDump::from_node(instance, node)),
        }
    }

    /// Pretty-printed JSON
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// # Errors
    /// Returns an error if the text is not a valid dump.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let json = self.to_json().map_err(io::Error::other)?;
        fs::write(path, json)
    }

    /// # Errors
    /// Returns an error if the file cannot be read or is not a valid dump.
    pub fn read_from<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text).map_err(io::Error::other)
    }
}
