//! Terminal output, logging and JSON dumps

pub mod display;
pub mod formatters;
pub mod json;
pub mod logger;

pub use display::{
    print_analysis_result, print_guess_analysis, print_solve_summary, print_trace,
    print_tree_outline, print_verify_report,
};
pub use json::{NodeDump, TreeDump};
