//! CLI argument parsing for locker.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::config::OutputFormat;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Locker: drive a reference-counted door from a script and watch its
/// lifecycle events.
///
/// The door is created by the first acquire and destroyed by the release
/// that brings the count back to zero. Every acquire emits `up` and every
/// release emits `down`.
#[derive(Parser, Debug)]
#[command(name = "locker")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for locker.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a lock script.
    ///
    /// Executes acquire/release/expect steps against a fresh door and
    /// prints the count and emitted events after every step.
    Run(RunArgs),

    /// List the event kinds a door emits.
    Kinds,
}

/// Arguments for the `run` command.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Script file to run, or `-` to read from stdin.
    pub script: PathBuf,

    /// YAML config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format (text or ndjson). Overrides the config file.
    #[arg(short, long)]
    pub format: Option<OutputFormat>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
