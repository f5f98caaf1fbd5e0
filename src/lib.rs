//! Locker: a reference-counted door that emits lifecycle events.
//!
//! Call [`Locker::acquire`] to take a lock and get a single-use
//! [`ReleaseToken`]. The first acquire *creates* the door and the release
//! that brings the count back to zero *destroys* it. Every acquire emits
//! `up` and every first-time release emits `down`.
//!
//! ```
//! use locker::{EventKind, Locker};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let locker = Locker::new();
//! let opened = Rc::new(Cell::new(0));
//!
//! let counter = Rc::clone(&opened);
//! locker.subscribe(EventKind::Create, move || counter.set(counter.get() + 1));
//!
//! let token = locker.acquire();
//! assert!(locker.is_locked());
//! token.release();
//! assert_eq!(locker.count(), 0);
//! assert_eq!(opened.get(), 1);
//! ```
//!
//! The `locker` binary drives a door from a script; see [`script`].

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod events;
pub mod exit_codes;
pub mod locks;
pub mod script;

pub use error::{LockerError, Result};
pub use events::{Emitter, EventKind, EventRecord, Recorder, Subscription};
pub use locks::{LockGuard, Locker, ReleaseToken};
