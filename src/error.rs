//! Error types for the msglint CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error
//! messages. Faults propagate unchanged to `main`; only the exit-code
//! mapping here translates them into the host build system's failure
//! signal.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for msglint operations.
///
/// Each variant maps to a specific exit code. A `Lint` error is the
/// expected failure mode of the tool and is not a fault: it means git ran
/// fine and some commit subjects did not match the configured pattern.
#[derive(Error, Debug)]
pub enum MsglintError {
    /// User provided invalid arguments or configuration.
    #[error("{0}")]
    User(String),

    /// The commit message pattern is not a valid regular expression.
    #[error("invalid commit message pattern: {0}")]
    Pattern(String),

    /// The git process could not be started.
    #[error("failed to run git: {0}")]
    GitLaunch(String),

    /// The git process started but exited with a non-zero status.
    #[error("git log exited with code {code}: {stderr}")]
    GitExit { code: i32, stderr: String },

    /// One or more commit subjects failed the pattern check.
    #[error("commit messages do not match {}\n{}", .pattern, .violations.join("\n"))]
    Lint {
        pattern: String,
        violations: Vec<String>,
    },
}

impl MsglintError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            MsglintError::User(_) => exit_codes::USER_ERROR,
            MsglintError::Pattern(_) => exit_codes::USER_ERROR,
            MsglintError::GitLaunch(_) => exit_codes::GIT_FAILURE,
            MsglintError::GitExit { .. } => exit_codes::GIT_FAILURE,
            MsglintError::Lint { .. } => exit_codes::LINT_FAILURE,
        }
    }
}

/// Result type alias for msglint operations.
pub type Result<T> = std::result::Result<T, MsglintError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = MsglintError::User("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn pattern_error_has_correct_exit_code() {
        let err = MsglintError::Pattern("unclosed group".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn git_launch_error_has_correct_exit_code() {
        let err = MsglintError::GitLaunch("No such file or directory".to_string());
        assert_eq!(err.exit_code(), exit_codes::GIT_FAILURE);
    }

    #[test]
    fn git_exit_error_has_correct_exit_code() {
        let err = MsglintError::GitExit {
            code: 128,
            stderr: "fatal: bad revision".to_string(),
        };
        assert_eq!(err.exit_code(), exit_codes::GIT_FAILURE);
    }

    #[test]
    fn lint_error_has_correct_exit_code() {
        let err = MsglintError::Lint {
            pattern: "#.+".to_string(),
            violations: vec!["bad subject".to_string()],
        };
        assert_eq!(err.exit_code(), exit_codes::LINT_FAILURE);
    }

    #[test]
    fn git_exit_message_preserves_exit_code() {
        let err = MsglintError::GitExit {
            code: 128,
            stderr: "fatal: bad revision 'origin/master..HEAD'".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("128"));
        assert!(message.contains("bad revision"));
    }

    #[test]
    fn lint_message_lists_every_violation_on_its_own_line() {
        let err = MsglintError::Lint {
            pattern: "#(\\d)+".to_string(),
            violations: vec!["#test".to_string(), "wip".to_string()],
        };
        let message = err.to_string();
        assert!(message.contains("#(\\d)+"));
        assert!(message.contains("#test\nwip"));
    }
}
