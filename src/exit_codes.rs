//! Exit code constants for the locker CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable files, invalid config)
//! - 2: Script failure (malformed step or failed expectation)
//! - 3: Lock failure (door left locked at the end of a run)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable files, or invalid configuration.
pub const USER_ERROR: i32 = 1;

/// Script failure: a step could not be parsed or an expectation did not hold.
pub const SCRIPT_FAILURE: i32 = 2;

/// Lock failure: tokens were still outstanding when the run finished.
pub const LOCK_FAILURE: i32 = 3;
