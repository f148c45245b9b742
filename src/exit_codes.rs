//! Exit code constants for the msglint CLI.
//!
//! The codes let a CI host tell "lint found violations" apart from
//! "linting itself could not run":
//! - 0: Success
//! - 1: User error (bad args, bad config, invalid pattern)
//! - 2: Lint failure (commit subjects did not match the pattern)
//! - 3: Git failure (git could not be started or exited non-zero)

/// Successful execution: every commit subject matched.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable config, or an invalid pattern.
pub const USER_ERROR: i32 = 1;

/// Lint failure: one or more commit subjects failed the pattern check.
pub const LINT_FAILURE: i32 = 2;

/// Git failure: the log process could not be started or exited non-zero.
pub const GIT_FAILURE: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, LINT_FAILURE, GIT_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn lint_failure_is_distinguishable_from_infrastructure_codes() {
        assert_eq!(SUCCESS, 0);
        assert_eq!(USER_ERROR, 1);
        assert_eq!(LINT_FAILURE, 2);
        assert_eq!(GIT_FAILURE, 3);
    }
}
