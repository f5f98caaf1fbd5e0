//! The closed set of lifecycle event kinds.

use crate::error::{LockerError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle events emitted by a [`Locker`](crate::locks::Locker).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Count went from 0 to 1; the door now exists.
    Create,
    /// Count was incremented.
    Up,
    /// Count went from 1 to 0; the door no longer exists.
    Destroy,
    /// Count was decremented.
    Down,
}

impl EventKind {
    /// Every kind, in the order they are documented.
    pub const ALL: [EventKind; 4] = [
        EventKind::Create,
        EventKind::Up,
        EventKind::Destroy,
        EventKind::Down,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Create => "create",
            EventKind::Up => "up",
            EventKind::Destroy => "destroy",
            EventKind::Down => "down",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = LockerError;

    /// Parse a kind name. Names are matched exactly; anything outside the
    /// closed set is rejected rather than silently registering a listener
    /// that could never fire.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "create" => Ok(EventKind::Create),
            "up" => Ok(EventKind::Up),
            "destroy" => Ok(EventKind::Destroy),
            "down" => Ok(EventKind::Down),
            other => Err(LockerError::InvalidEventKind(other.to_string())),
        }
    }
}
