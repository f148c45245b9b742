//! Exit-status verification decorator.

use super::source::ProcessSource;
use crate::error::{MsglintError, Result};
use std::process::Output;

/// Decorator over a process source that fails on a non-zero exit status.
///
/// Verification is separate from output consumption: downstream stages
/// never see the output of a failed process, so partial output is never
/// treated as the final commit list.
#[derive(Debug, Clone)]
pub struct Verified<S> {
    source: S,
}

impl<S: ProcessSource> Verified<S> {
    /// Wrap a process source with exit-status verification.
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S: ProcessSource> ProcessSource for Verified<S> {
    fn output(&self) -> Result<Output> {
        let output = self.source.output()?;
        if output.status.success() {
            Ok(output)
        } else {
            Err(MsglintError::GitExit {
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}
