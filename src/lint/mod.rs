//! Commit subject lint pipeline.
//!
//! Four stages composed by construction: [`SubjectLog`] runs the git
//! subject-listing process, [`Verified`] checks its exit status,
//! [`lines_from`] decodes its output into ordered lines, and
//! [`SubjectPattern`] filters out the subjects that do not match. Each
//! stage is a single-method transformer over "a thing that produces a
//! process" or "a thing that produces lines"; there is no inheritance,
//! retry, or concurrency — one linear pass per run, faults propagating
//! unchanged.

mod filter;
mod lines;
mod source;
mod verify;

pub use filter::SubjectPattern;
pub use lines::lines_from;
pub use source::{ProcessSource, SubjectLog};
pub use verify::Verified;

use crate::error::Result;
use std::path::Path;

/// Outcome of a lint run over a commit range.
#[derive(Debug, Clone)]
pub struct LintOutcome {
    /// Number of commit subjects checked.
    pub checked: usize,

    /// Subjects that failed the pattern, newest first.
    pub violations: Vec<String>,
}

impl LintOutcome {
    /// Whether every checked subject matched the pattern.
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Run the lint pipeline once.
///
/// Compiles the pattern before spawning any process, then makes a single
/// linear pass: list subjects in `<upstream>..HEAD`, verify the process
/// succeeded, decode its output, and collect the subjects that do not
/// fully match.
pub fn run(
    directory: &Path,
    upstream: &str,
    pattern: &str,
    first_parent: bool,
) -> Result<LintOutcome> {
    let subject_pattern = SubjectPattern::compile(pattern)?;
    let log = SubjectLog::new(directory, upstream).first_parent(first_parent);
    let subjects = lines_from(&Verified::new(log))?;
    let violations = subject_pattern.mismatches(&subjects);

    Ok(LintOutcome {
        checked: subjects.len(),
        violations,
    })
}
