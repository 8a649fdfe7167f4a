//! Command implementations

pub mod analyze;
pub mod solve;
pub mod verify;

pub use analyze::{AnalysisResult, AnalyzeError, GuessAnalysis, analyze_openers, analyze_word};
pub use solve::{SolveSummary, TraceStep, build_tree, trace_secret};
pub use verify::{VerifyError, VerifyReport, verify_tree};
