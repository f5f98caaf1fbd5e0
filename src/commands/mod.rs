//! Command implementations for locker.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

pub mod kinds;
pub mod run;

use crate::cli::Command;
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Run(args) => run::cmd_run(args),
        Command::Kinds => kinds::cmd_kinds(),
    }
}
