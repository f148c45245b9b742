//! CLI argument parsing for msglint.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Msglint: build-gate linter for git commit subject lines.
///
/// Checks every non-merge commit between an upstream reference and the
/// current branch tip against a regular expression, and fails the build
/// when a subject line does not match.
#[derive(Parser, Debug)]
#[command(name = "msglint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for msglint.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check commit subjects in `<upstream>..HEAD` against a pattern.
    ///
    /// Exits 0 when every subject matches, 2 when violations are found,
    /// 1 on bad configuration, and 3 when git itself fails.
    Check(CheckArgs),
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Git repository directory: the working tree or its .git directory.
    /// Defaults to the current directory.
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Regular expression every commit subject must fully match.
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Upstream reference excluded from the check (e.g. origin/master).
    #[arg(short, long)]
    pub upstream: Option<String>,

    /// Whether to follow only the first parent of each commit.
    #[arg(long, action = ArgAction::Set)]
    pub first_parent: Option<bool>,

    /// Path to a configuration file. Defaults to .msglint.yaml in the
    /// repository directory, when present.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the lint report as JSON to stdout.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
