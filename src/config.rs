//! Configuration model for msglint.
//!
//! This module defines the Config struct that represents `.msglint.yaml`
//! in the target repository directory. It supports forward-compatible YAML
//! parsing (unknown fields are ignored) and sensible defaults for optional
//! fields. CLI flags take precedence over file values; resolution happens
//! in the `check` command.

use crate::error::{MsglintError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the configuration file looked up in the repository directory.
pub const CONFIG_FILE_NAME: &str = ".msglint.yaml";

/// Configuration for a lint run.
///
/// This struct represents the contents of `.msglint.yaml`. Unknown fields
/// in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Regular expression every commit subject must fully match.
    /// Required overall, but may come from the CLI instead of the file.
    pub pattern: Option<String>,

    /// Upstream reference excluded from the check (default: "origin/master").
    #[serde(default = "default_upstream")]
    pub upstream: String,

    /// Whether to follow only the first parent of each commit (default: true).
    #[serde(default = "default_true")]
    pub first_parent: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pattern: None,
            upstream: default_upstream(),
            first_parent: default_true(),
        }
    }
}

fn default_upstream() -> String {
    "origin/master".to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from the given path.
    ///
    /// An unreadable or malformed file is a user error: a build gate must
    /// not silently fall back to defaults when its config is broken.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            MsglintError::User(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        serde_yaml::from_str(&content).map_err(|e| {
            MsglintError::User(format!(
                "failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Load `.msglint.yaml` from the repository directory if present,
    /// defaults otherwise.
    pub fn discover(directory: &Path) -> Result<Self> {
        let path = directory.join(CONFIG_FILE_NAME);
        if path.exists() {
            Config::load(&path)
        } else {
            Ok(Config::default())
        }
    }
}
