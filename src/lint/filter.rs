//! Full-match subject pattern.

use crate::error::{MsglintError, Result};
use regex::Regex;

/// A commit subject pattern with whole-line match semantics.
///
/// The configured expression is compiled once per lint run, anchored as
/// `^(?:pattern)$` so a subject matches only when the entire line
/// satisfies the expression, not merely a substring.
#[derive(Debug, Clone)]
pub struct SubjectPattern {
    regex: Regex,
    pattern: String,
}

impl SubjectPattern {
    /// Compile the pattern, failing fast on an invalid expression.
    ///
    /// Called before any process is spawned so a bad pattern never costs
    /// a git invocation.
    pub fn compile(pattern: &str) -> Result<Self> {
        let regex = Regex::new(&format!("^(?:{})$", pattern))
            .map_err(|e| MsglintError::Pattern(e.to_string()))?;
        Ok(Self {
            regex,
            pattern: pattern.to_string(),
        })
    }

    /// The pattern text as configured.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Whether the entire subject matches the pattern.
    pub fn is_match(&self, subject: &str) -> bool {
        self.regex.is_match(subject)
    }

    /// Return, in original order, every line that does not fully match.
    pub fn mismatches(&self, lines: &[String]) -> Vec<String> {
        lines
            .iter()
            .filter(|line| !self.is_match(line))
            .cloned()
            .collect()
    }
}
