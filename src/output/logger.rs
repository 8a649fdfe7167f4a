//! Console logging behind the `log` facade
//!
//! Messages go to stderr so they never mix with JSON written to stdout.
//! `RUST_LOG` still overrides the level picked on the command line.

use colored::Colorize;
use env_logger::{Builder, Target};
use log::{Level, LevelFilter, SetLoggerError};
use std::io::Write;

fn format_line(level: Level, message: &str) -> String {
    let tag = match level {
        Level::Error => "error".red().bold(),
        Level::Warn => "warn".yellow().bold(),
        Level::Info => "info".green(),
        Level::Debug => "debug".blue(),
        Level::Trace => "trace".bright_black(),
    };
    format!("{tag:>5} {message}")
}

/// Level for `-v` repeated `verbosity` times; `quiet` keeps only errors
#[must_use]
pub const fn level_for(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn builder(level: LevelFilter) -> Builder {
    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .parse_default_env()
        .target(Target::Stderr)
        .format(|buf, record| {
            writeln!(
                buf,
                "{}",
                format_line(record.level(), &record.args().to_string())
            )
        });
    builder
}

/// Install the console logger
///
/// # Errors
/// Returns an error if a logger is already installed.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    builder(level).try_init()
}
