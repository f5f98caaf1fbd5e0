//! Event subsystem for locker.
//!
//! A [`Locker`](crate::locks::Locker) reports its lifecycle through four
//! events:
//! - `create`: the count went from 0 to 1
//! - `up`: every increment
//! - `destroy`: the count went from 1 to 0
//! - `down`: every decrement
//!
//! # Dispatch
//!
//! [`Emitter`] is a small synchronous publish/subscribe table. Listeners are
//! plain `Fn()` closures with no payload, invoked in registration order on
//! the caller's thread before `emit` returns.
//!
//! # Recording
//!
//! [`Recorder`] attaches to a locker and captures every emission as an
//! [`EventRecord`], which serializes to one NDJSON line.

mod emitter;
mod kind;
mod record;


// Re-export public API
pub use emitter::{Emitter, Listener, Subscription};
pub use kind::EventKind;
pub use record::{EventRecord, Recorder};
