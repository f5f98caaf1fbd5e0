//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for the script runner.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Report format for each executed step.
    #[serde(default)]
    pub output: OutputFormat,

    /// Fail the run if any lock is still held after the last step.
    #[serde(default = "default_true")]
    pub require_unlocked_at_end: bool,

    /// Maximum number of unreleased tokens a script may hold at once.
    #[serde(default = "default_max_outstanding")]
    pub max_outstanding: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputFormat::default(),
            require_unlocked_at_end: default_true(),
            max_outstanding: default_max_outstanding(),
        }
    }
}
