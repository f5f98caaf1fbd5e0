//! Locking subsystem for locker.
//!
//! This module implements the reference-counted door:
//! - [`Locker`] owns the count and the event emitter
//! - [`ReleaseToken`] is the single-use capability returned by `acquire`
//! - [`LockGuard`] wraps a token and releases it on drop
//!
//! # Counting
//!
//! The door is *created* when the count leaves 0 and *destroyed* when it
//! returns to 0. Both are notifications only; the `Locker` itself lives as
//! long as its owner keeps it and can cycle through any number of doors.
//!
//! # Release tokens
//!
//! A token borrows its locker, so it cannot outlive it. Releasing twice is
//! a no-op, which keeps every token's effect on the count at exactly one.
//! Releasing with a count of 0 cannot happen through tokens; the internal
//! guard against it asserts in debug builds and is logged and ignored in
//! release builds.

mod counter;
mod guard;
mod token;


// Re-export public API
pub use counter::Locker;
pub use guard::LockGuard;
pub use token::ReleaseToken;
