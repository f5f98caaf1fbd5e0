//! Error types for locker.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for locker operations.
///
/// Acquire, release and the count queries never fail; errors only come from
/// string-keyed subscription and from the script runner.
#[derive(Error, Debug)]
pub enum LockerError {
    /// Event kind outside the closed set `create`, `up`, `destroy`, `down`.
    #[error("unknown event kind '{0}' (expected one of: create, up, destroy, down)")]
    InvalidEventKind(String),

    /// User provided invalid arguments, files, or configuration.
    #[error("{0}")]
    UserError(String),

    /// A script step was malformed or its expectation did not hold.
    #[error("script line {line}: {message}")]
    ScriptError { line: usize, message: String },

    /// The door was left locked when it was required to be unlocked.
    #[error("Lock still held: {0}")]
    LockError(String),
}

impl LockerError {
    /// Build a script error for the given 1-based line number.
    pub fn script(line: usize, message: impl Into<String>) -> Self {
        LockerError::ScriptError {
            line,
            message: message.into(),
        }
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            LockerError::InvalidEventKind(_) => exit_codes::USER_ERROR,
            LockerError::UserError(_) => exit_codes::USER_ERROR,
            LockerError::ScriptError { .. } => exit_codes::SCRIPT_FAILURE,
            LockerError::LockError(_) => exit_codes::LOCK_FAILURE,
        }
    }
}

/// Result type alias for locker operations.
pub type Result<T> = std::result::Result<T, LockerError>;
