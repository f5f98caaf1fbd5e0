//! Config value types and serde default functions.

use crate::error::{LockerError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How the script runner reports each step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// One human-readable line per step (default).
    #[default]
    Text,
    /// One JSON object per step.
    Ndjson,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Ndjson => "ndjson",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = LockerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "ndjson" => Ok(OutputFormat::Ndjson),
            other => Err(LockerError::UserError(format!(
                "unknown output format '{}' (expected 'text' or 'ndjson')",
                other
            ))),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

// Default value functions for serde
pub(crate) fn default_max_outstanding() -> u32 {
    1024
}
pub(crate) fn default_true() -> bool {
    true
}
