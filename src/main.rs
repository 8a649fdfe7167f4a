//! Wordle decision tree optimizer - CLI
//!
//! Builds the guessing strategy with the fewest total guesses over a list of
//! secrets, writes it as JSON, and replays saved trees.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::info;
use std::path::{Path, PathBuf};
use wordle_tree::{
    commands::{analyze_openers, analyze_word, build_tree, trace_secret, verify_tree},
    core::{Word, WordleInstance},
    output::{
        TreeDump, logger, print_analysis_result, print_guess_analysis, print_solve_summary,
        print_trace, print_tree_outline, print_verify_report,
    },
    solver::{ScoreCache, SearchConfig},
    wordlists::{
        SAMPLE,
        loader::{load_from_file, parse_words, take_prefix},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_tree",
    about = "Optimal Wordle decision trees by branch-and-bound search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// More log output (-v info, -vv search progress, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Args)]
struct WordListArgs {
    /// Secret words, one per line (default: embedded 50-word sample)
    #[arg(short = 's', long)]
    secrets: Option<PathBuf>,

    /// Allowed guesses, one per line (default: the secrets)
    #[arg(short = 'g', long)]
    guesses: Option<PathBuf>,

    /// Use only the first N secrets
    #[arg(long)]
    secrets_limit: Option<usize>,

    /// Use only the first N guesses
    #[arg(long)]
    guesses_limit: Option<usize>,
}

#[derive(Args)]
struct SearchArgs {
    /// Guesses tried per node, best entropy first
    #[arg(short, long, default_value_t = SearchConfig::DEFAULT_BREADTH, value_parser = parse_positive)]
    breadth: usize,

    /// Skip guesses below this fraction of the best entropy (0 to 1)
    #[arg(short, long, default_value_t = SearchConfig::DEFAULT_ENTROPY_CUTOFF, value_parser = parse_cutoff)]
    cutoff: f64,

    /// Try every guess at every node (slow, optimal)
    #[arg(long, conflicts_with_all = ["breadth", "cutoff"])]
    exhaustive: bool,

    /// Most guesses any secret may need
    #[arg(long, default_value_t = SearchConfig::DEFAULT_MAX_DEPTH, value_parser = parse_positive)]
    max_depth: usize,

    /// Do not reuse subtrees for repeated candidate sets
    #[arg(long)]
    no_memoize: bool,

    /// Log search progress for nodes shallower than this (with -vv)
    #[arg(long, default_value_t = 1)]
    log_depth: usize,
}

fn parse_positive(text: &str) -> Result<usize, String> {
    match text.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(value) => Ok(value),
        Err(err) => Err(err.to_string()),
    }
}

fn parse_cutoff(text: &str) -> Result<f64, String> {
    let cutoff: f64 = text.parse().map_err(|err: std::num::ParseFloatError| err.to_string())?;
    if (0.0..=1.0).contains(&cutoff) {
        Ok(cutoff)
    } else {
        Err(format!("cutoff must be between 0 and 1, got {cutoff}"))
    }
}

impl SearchArgs {
    const fn config(&self) -> SearchConfig {
        let base = if self.exhaustive {
            SearchConfig::exhaustive()
        } else {
            SearchConfig::new(self.breadth, self.cutoff)
        };
        base.with_max_depth(self.max_depth)
            .with_memoize(!self.no_memoize)
            .with_log_depth(self.log_depth)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Build the decision tree and write it as JSON
    Solve {
        #[command(flatten)]
        words: WordListArgs,

        #[command(flatten)]
        search: SearchArgs,

        /// Every guess must use the letters revealed so far
        #[arg(long)]
        hard: bool,

        /// Write the tree here ("-" for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the first N levels of the tree
        #[arg(long, default_value_t = 0)]
        outline: usize,

        /// Show the guesses the tree plays for this secret
        #[arg(short, long)]
        trace: Option<String>,

        /// Show a progress bar over the root guesses
        #[arg(short, long)]
        progress: bool,
    },

    /// Rank opening guesses by entropy
    Analyze {
        #[command(flatten)]
        words: WordListArgs,

        /// Analyze only this guess
        #[arg(short, long)]
        word: Option<String>,

        /// Number of guesses to list
        #[arg(short = 'n', long, default_value_t = 10)]
        top: usize,
    },

    /// Replay a saved tree against every secret
    Verify {
        /// Tree written by `solve`
        tree: PathBuf,

        #[command(flatten)]
        words: WordListArgs,
    },
}

fn read_list(path: &Path) -> Result<Vec<Word>> {
    load_from_file(path).with_context(|| format!("Failed to load word list {}", path.display()))
}

/// Load the word lists and build the instance
fn load_instance(args: &WordListArgs, hard_mode: bool) -> Result<WordleInstance> {
    let secrets = match &args.secrets {
        Some(path) => read_list(path)?,
        None => parse_words(SAMPLE).context("Embedded sample list is invalid")?,
    };
    let guesses = match &args.guesses {
        Some(path) => read_list(path)?,
        None => secrets.clone(),
    };

    let secrets = take_prefix(secrets, args.secrets_limit);
    let guesses = take_prefix(guesses, args.guesses_limit);
    info!(
        "Loaded {} secrets and {} guesses",
        secrets.len(),
        guesses.len()
    );

    WordleInstance::new(secrets, guesses, hard_mode).context("Invalid word lists")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(logger::level_for(cli.verbose, cli.quiet))
        .context("Failed to install logger")?;

    match cli.command {
        Commands::Solve {
            words,
            search,
            hard,
            output,
            outline,
            trace,
            progress,
        } => run_solve_command(
            &words,
            &search.config(),
            hard,
            output.as_deref(),
            outline,
            trace.as_deref(),
            progress,
        ),
        Commands::Analyze { words, word, top } => {
            run_analyze_command(&words, word.as_deref(), top)
        }
        Commands::Verify { tree, words } => run_verify_command(&tree, &words),
    }
}

fn run_solve_command(
    words: &WordListArgs,
    config: &SearchConfig,
    hard: bool,
    output: Option<&Path>,
    outline: usize,
    trace: Option<&str>,
    progress: bool,
) -> Result<()> {
    let instance = load_instance(words, hard)?;
    let summary = build_tree(&instance, *config, progress);
    let dump = TreeDump::new(&instance, &summary.result);

    match output {
        Some(path) if path.as_os_str() == "-" => {
            println!("{}", dump.to_json().context("Failed to serialize tree")?);
            return Ok(());
        }
        Some(path) => {
            dump.write_to(path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote tree to {}", path.display());
        }
        None => {}
    }

    print_solve_summary(&instance, config, &summary);
    if let Some(tree) = &summary.result.tree {
        if outline > 0 {
            print_tree_outline(&instance, tree, outline);
        }
        if let Some(secret) = trace {
            let steps = trace_secret(&instance, tree, &secret.to_lowercase())
                .with_context(|| format!("'{secret}' is not one of the secrets"))?;
            print_trace(secret, &steps);
        }
    }
    Ok(())
}

fn run_analyze_command(words: &WordListArgs, word: Option<&str>, top: usize) -> Result<()> {
    let instance = load_instance(words, false)?;
    let scores = ScoreCache::new(&instance);

    match word {
        Some(word) => {
            let analysis = analyze_word(&instance, &scores, word)?;
            print_guess_analysis(&analysis, instance.n_secrets());
        }
        None => print_analysis_result(&analyze_openers(&instance, &scores, top)),
    }
    Ok(())
}

fn run_verify_command(tree: &Path, words: &WordListArgs) -> Result<()> {
    let dump = TreeDump::read_from(tree)
        .with_context(|| format!("Failed to read tree {}", tree.display()))?;
    let instance = load_instance(words, dump.hard_mode)?;

    let report = verify_tree(&instance, &dump)
        .with_context(|| format!("Tree {} does not check out", tree.display()))?;
    print_verify_report(&report);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve_args(extra: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(["wordle_tree", "solve"].into_iter().chain(extra.iter().copied()))
    }

    #[test]
    fn search_limits_must_be_usable() {
        assert!(solve_args(&["--breadth", "0"]).is_err());
        assert!(solve_args(&["--max-depth", "0"]).is_err());
        assert!(solve_args(&["--cutoff", "1.5"]).is_err());
        assert!(solve_args(&["--cutoff", "-0.1"]).is_err());
        assert!(solve_args(&["--cutoff", "nan"]).is_err());
    }

    #[test]
    fn search_limits_reach_the_config() {
        let cli = solve_args(&["--breadth", "3", "--cutoff", "1", "--max-depth", "4"]).unwrap();
        let Commands::Solve { search, .. } = cli.command else {
            panic!("expected solve");
        };
        let config = search.config();
        assert_eq!(config.search_breadth, 3);
        assert!((config.entropy_cutoff - 1.0).abs() < f64::EPSILON);
        assert_eq!(config.max_depth, 4);
    }
}
