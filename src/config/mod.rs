//! Configuration model for the locker script runner.
//!
//! This module defines the Config struct read from an optional YAML file
//! passed with `--config`. It supports forward-compatible YAML parsing
//! (unknown fields are ignored), defaults for every field, and validation.
//! The library types in `locks` and `events` take no configuration.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use types::OutputFormat;
