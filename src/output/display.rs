//! Display functions for command results

use super::formatters::{create_progress_bar, entropy_bar, format_duration, percent};
use crate::commands::{AnalysisResult, GuessAnalysis, SolveSummary, TraceStep, VerifyReport};
use crate::core::WordleInstance;
use crate::solver::{DecisionNode, SearchConfig};
use colored::Colorize;
use std::collections::BTreeMap;

fn header(title: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
}

fn print_distribution(distribution: &BTreeMap<usize, usize>, n_secrets: usize) {
    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&turns, &count) in distribution {
        let pct = percent(count, n_secrets);
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {turns:2}: {bar} {count:5} ({pct:5.1}%)");
    }
}

fn no_tree_reason(instance: &WordleInstance, config: &SearchConfig) -> String {
    if instance.n_secrets() == 0 {
        "No tree: nothing to solve".to_string()
    } else {
        format!(
            "No tree solves every secret within {} guesses under these search limits",
            config.max_depth
        )
    }
}

/// Print the outcome of building a tree
pub fn print_solve_summary(instance: &WordleInstance, config: &SearchConfig, summary: &SolveSummary) {
    header("DECISION TREE");

    let mode = if instance.hard_mode() { "hard" } else { "normal" };
    println!(
        "\n🎯 {} secrets, {} guesses, {} mode",
        instance.n_secrets(),
        instance.n_guesses(),
        mode
    );
    let breadth = if config.search_breadth == usize::MAX {
        "all".to_string()
    } else {
        config.search_breadth.to_string()
    };
    println!(
        "   Breadth {breadth}, cutoff {:.2}, max depth {}",
        config.entropy_cutoff, config.max_depth
    );

    let result = &summary.result;
    let Some(tree) = &result.tree else {
        println!("\n{}", no_tree_reason(instance, config).yellow());
        return;
    };

    println!("\n📊 {}", "Result:".bright_cyan().bold());
    println!(
        "   First guess:      {}",
        summary
            .first_guess
            .as_deref()
            .unwrap_or_default()
            .to_uppercase()
            .bright_yellow()
            .bold()
    );
    println!("   Total guesses:    {}", result.total.to_string().bold());
    println!(
        "   Average guesses:  {}",
        format!("{:.4}", result.average).bright_yellow().bold()
    );
    println!(
        "   Best case:        {}",
        tree.stats().best_case.to_string().green()
    );
    println!(
        "   Worst case:       {}",
        tree.stats().worst_case.to_string().yellow()
    );
    println!("   Tree nodes:       {}", summary.node_count);
    println!("   Time taken:       {}", format_duration(result.duration));
    if result.cache_entries > 0 {
        println!(
            "   Subtree cache:    {} entries, {} hits, {} misses",
            result.cache_entries, result.cache_hits, result.cache_misses
        );
    }

    print_distribution(&summary.distribution, instance.n_secrets());
}

/// Print the top of a tree, `levels` guesses deep
pub fn print_tree_outline(instance: &WordleInstance, node: &DecisionNode, levels: usize) {
    println!("\n🌳 {}", "Tree:".bright_cyan().bold());
    print_node(instance, node, "", levels);
}

fn print_node(instance: &WordleInstance, node: &DecisionNode, indent: &str, levels: usize) {
    let stats = node.stats();
    println!(
        "   {indent}{} {}",
        instance.guesses()[node.guess()].text().to_uppercase().bold(),
        format!(
            "n={} total={} avg={:.3}",
            stats.n_secrets, stats.total, stats.average_case
        )
        .bright_black()
    );
    if levels <= 1 {
        return;
    }
    let child_indent = format!("{indent}  ");
    for branch in node.branches() {
        print!("   {child_indent}{} ", branch.pattern);
        if branch.node.is_leaf() {
            println!(
                "{}",
                instance.guesses()[branch.node.guess()]
                    .text()
                    .to_uppercase()
                    .green()
            );
        } else {
            println!();
            print_node(instance, &branch.node, &format!("{child_indent}  "), levels - 1);
        }
    }
}

/// Print the guesses played for one secret
pub fn print_trace(secret: &str, steps: &[TraceStep]) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Playing: {}", secret.to_uppercase().bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in steps.iter().enumerate() {
        println!(
            "Turn {}: {} {}  {}",
            i + 1,
            step.word.to_uppercase(),
            step.pattern,
            format!("({} candidates)", step.candidates_before).bright_black()
        );
    }
    println!(
        "{}",
        format!("✅ Solved in {} guesses!", steps.len()).green().bold()
    );
}

fn print_guess_line(analysis: &GuessAnalysis, total_candidates: usize) {
    let bar = entropy_bar(analysis.entropy, total_candidates, 20);
    let marker = if analysis.is_candidate { "●" } else { " " };
    println!(
        "   {} {} [{}] {}  groups {:3}  largest {:4}  expect {:6.2}",
        marker.green(),
        analysis.word.to_uppercase().bold(),
        bar.green(),
        format!("{:.3} bits", analysis.entropy).bright_yellow(),
        analysis.groups,
        analysis.largest_group,
        analysis.expected_remaining
    );
}

/// Print the best opening guesses
pub fn print_analysis_result(result: &AnalysisResult) {
    header("OPENING GUESSES");
    println!("\n📊 Against {} possible secrets:", result.total_candidates);
    for analysis in &result.guesses {
        print_guess_line(analysis, result.total_candidates);
    }
}

/// Print the analysis of one guess
pub fn print_guess_analysis(analysis: &GuessAnalysis, total_candidates: usize) {
    header(&format!("ENTROPY ANALYSIS: {}", analysis.word.to_uppercase()));
    println!("\n📊 Against {total_candidates} possible secrets:");
    print_guess_line(analysis, total_candidates);
}

/// Print the outcome of replaying a tree
pub fn print_verify_report(report: &VerifyReport) {
    header("VERIFIED");
    println!("\n   Secrets:          {}", report.n_secrets);
    println!("   Total guesses:    {}", report.total.to_string().bold());
    println!(
        "   Average guesses:  {}",
        format!("{:.4}", report.average()).bright_yellow().bold()
    );
    println!("   Worst case:       {}", report.worst_case.to_string().yellow());
    let solved: usize = report.distribution.values().sum();
    println!(
        "   Solved:           [{}] {solved}/{}",
        create_progress_bar(solved as f64, report.n_secrets as f64, 20).green(),
        report.n_secrets
    );

    print_distribution(&report.distribution, report.n_secrets);
}
