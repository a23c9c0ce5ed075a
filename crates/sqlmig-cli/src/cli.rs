//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::str::FromStr;

/// sqlmig - migration tool using paired SQL files (*.up.sql / *.down.sql)
#[derive(Parser, Debug)]
#[command(name = "sqlmig")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Path to project directory
    #[arg(short = 'p', long, global = true, default_value = ".")]
    pub project_dir: String,

    /// Override the migration directory
    #[arg(short, long, global = true)]
    pub migration_path: Option<String>,

    /// Override the history table name
    #[arg(short, long, global = true)]
    pub table: Option<String>,

    /// Override the database path (":memory:" for in-memory)
    #[arg(short, long, global = true)]
    pub database: Option<String>,

    /// Answer yes to confirmation prompts
    #[arg(short = 'y', long, global = true)]
    pub yes: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply pending migrations
    Up(UpArgs),

    /// Revert applied migrations
    Down(DownArgs),

    /// Revert and reapply recent migrations
    Redo(RedoArgs),

    /// Migrate up or down to a specific version
    To(ToArgs),

    /// Show the applied migration history
    History(HistoryArgs),

    /// Show pending migrations
    New(NewArgs),
}

/// Arguments for the up command
#[derive(Args, Debug)]
pub struct UpArgs {
    /// Number of pending migrations to apply (default: all)
    #[arg(value_parser = parse_limit)]
    pub limit: Option<Limit>,
}

/// Arguments for the down command
#[derive(Args, Debug)]
pub struct DownArgs {
    /// Number of applied migrations to revert, or "all"
    #[arg(default_value = "1", value_parser = parse_limit)]
    pub limit: Limit,
}

/// Arguments for the redo command
#[derive(Args, Debug)]
pub struct RedoArgs {
    /// Number of applied migrations to redo, or "all"
    #[arg(default_value = "1", value_parser = parse_limit)]
    pub limit: Limit,
}

/// Arguments for the to command
#[derive(Args, Debug)]
pub struct ToArgs {
    /// Target version number
    #[arg(value_parser = clap::value_parser!(i64).range(1..))]
    pub version: i64,
}

/// Arguments for the history command
#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Number of history entries to show, or "all"
    #[arg(default_value = "10", value_parser = parse_limit)]
    pub limit: Limit,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: OutputFormat,
}

/// Arguments for the new command
#[derive(Args, Debug)]
pub struct NewArgs {
    /// Number of pending migrations to show, or "all"
    #[arg(default_value = "10", value_parser = parse_limit)]
    pub limit: Limit,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: OutputFormat,
}

/// Listing output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain text listing
    Table,
    /// JSON output
    Json,
}

/// Row-count limit: a positive integer, or "all" for no limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    All,
    Count(usize),
}

impl Limit {
    /// `None` means unlimited.
    pub fn as_option(self) -> Option<usize> {
        match self {
            Limit::All => None,
            Limit::Count(n) => Some(n),
        }
    }
}

impl FromStr for Limit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(Limit::All);
        }
        match s.parse::<usize>() {
            Ok(n) if n >= 1 => Ok(Limit::Count(n)),
            _ => Err(format!(
                "the limit must be a positive integer or \"all\", got '{}'",
                s
            )),
        }
    }
}

fn parse_limit(s: &str) -> Result<Limit, String> {
    Limit::from_str(s)
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod cli_test;
