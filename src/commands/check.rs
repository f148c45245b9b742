//! Implementation of the `msglint check` command.
//!
//! Resolves the effective settings (CLI flags over `.msglint.yaml` over
//! built-in defaults), runs the lint pipeline once, and translates the
//! outcome into the exit-code contract.
//!
//! # Exit Codes
//!
//! - 0: Every commit subject matched the pattern
//! - 1: User error (missing pattern, bad config, invalid pattern)
//! - 2: Lint failure (violating subjects found)
//! - 3: Git failure (process could not start or exited non-zero)

use crate::cli::CheckArgs;
use crate::config::Config;
use crate::error::{MsglintError, Result};
use crate::lint;
use serde::Serialize;

/// Machine-readable lint report printed by `--json`.
#[derive(Debug, Clone, Serialize)]
pub struct LintReport {
    /// The pattern subjects were checked against.
    pub pattern: String,
    /// The upstream reference bounding the commit range.
    pub upstream: String,
    /// Number of commit subjects checked.
    pub checked: usize,
    /// Whether every subject matched.
    pub passed: bool,
    /// Subjects that failed the pattern, newest first.
    pub violations: Vec<String>,
}

/// Execute the `msglint check` command.
pub fn cmd_check(args: CheckArgs) -> Result<()> {
    let directory = match args.directory {
        Some(dir) => dir,
        None => std::env::current_dir().map_err(|e| {
            MsglintError::User(format!("failed to resolve current directory: {}", e))
        })?,
    };

    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::discover(&directory)?,
    };

    let pattern = args.pattern.or(config.pattern).ok_or_else(|| {
        MsglintError::User(
            "no commit message pattern configured.\n\n\
             Pass --pattern or set `pattern` in .msglint.yaml."
                .to_string(),
        )
    })?;
    let upstream = args.upstream.unwrap_or(config.upstream);
    let first_parent = args.first_parent.unwrap_or(config.first_parent);

    let outcome = lint::run(&directory, &upstream, &pattern, first_parent)?;

    if args.json {
        let report = LintReport {
            pattern: pattern.clone(),
            upstream: upstream.clone(),
            checked: outcome.checked,
            passed: outcome.passed(),
            violations: outcome.violations.clone(),
        };
        let rendered = serde_json::to_string_pretty(&report).map_err(|e| {
            MsglintError::User(format!("failed to serialize lint report: {}", e))
        })?;
        println!("{}", rendered);
    }

    if !outcome.passed() {
        return Err(MsglintError::Lint {
            pattern,
            violations: outcome.violations,
        });
    }

    if !args.json {
        println!(
            "Checked {} commit subject(s) in {}..HEAD: all match {}",
            outcome.checked, upstream, pattern
        );
    }

    Ok(())
}
