//! Command implementations for msglint.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod check;

use crate::cli::Command;
use crate::error::Result;

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Check(args) => check::cmd_check(args),
    }
}
