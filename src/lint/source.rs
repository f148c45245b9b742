//! Git subject-listing process construction.

use crate::error::{MsglintError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Capability to produce a finished git process.
///
/// Every pipeline stage is either a source or a decorator over one, so the
/// stages compose by construction. The blanket impl for closures keeps
/// fakes trivial in tests.
pub trait ProcessSource {
    /// Run the process to completion and return its buffered output.
    fn output(&self) -> Result<Output>;
}

impl<F> ProcessSource for F
where
    F: Fn() -> Result<Output>,
{
    fn output(&self) -> Result<Output> {
        self()
    }
}

/// Lists one subject line per non-merge commit in `<upstream>..HEAD`,
/// newest first.
#[derive(Debug, Clone)]
pub struct SubjectLog {
    directory: PathBuf,
    upstream: String,
    first_parent: bool,
}

impl SubjectLog {
    /// Create a subject listing for the given repository directory and
    /// upstream reference.
    ///
    /// `directory` may be either the working tree or the `.git` directory;
    /// git resolves both when the process runs with its working directory
    /// set there.
    pub fn new<P: AsRef<Path>>(directory: P, upstream: &str) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
            upstream: upstream.to_string(),
            first_parent: true,
        }
    }

    /// Set whether to follow only the first parent of each commit.
    pub fn first_parent(mut self, enabled: bool) -> Self {
        self.first_parent = enabled;
        self
    }
}

impl ProcessSource for SubjectLog {
    fn output(&self) -> Result<Output> {
        let mut command = Command::new("git");
        command
            .current_dir(&self.directory)
            .args(["log", "--abbrev-commit", "--format=%s", "--no-merges"]);
        if self.first_parent {
            command.arg("--first-parent");
        }
        command.arg(format!("{}..HEAD", self.upstream));

        // An unresolvable upstream is left to the process exit status;
        // only spawn errors surface here.
        command.output().map_err(|e| {
            MsglintError::GitLaunch(format!(
                "failed to execute git log in '{}': {}",
                self.directory.display(),
                e
            ))
        })
    }
}
