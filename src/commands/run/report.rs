//! Per-step reports produced by the runner.

use crate::error::{LockerError, Result};
use crate::events::EventRecord;
use serde::Serialize;

/// What one script step did to the locker.
#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    /// 1-based script line.
    pub line: usize,

    /// The step in canonical text form.
    pub step: String,

    /// Count after the step.
    pub count: usize,

    /// Whether the door was locked after the step.
    pub locked: bool,

    /// Events emitted while the step ran, in order.
    pub events: Vec<EventRecord>,
}

impl StepReport {
    /// Render as one human-readable line.
    pub fn to_text(&self) -> String {
        let events: Vec<&str> = self.events.iter().map(|e| e.kind.as_str()).collect();
        format!(
            "{:>4}  {:<24} count={} locked={} [{}]",
            self.line,
            self.step,
            self.count,
            self.locked,
            events.join(", ")
        )
    }

    /// Serialize to a single-line JSON string.
    pub fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| {
            LockerError::UserError(format!("failed to serialize step report to JSON: {}", e))
        })
    }
}

/// Outcome of a complete run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of steps executed.
    pub steps: usize,

    /// Count after the last step.
    pub final_count: usize,
}
