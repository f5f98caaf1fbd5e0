//! The reference-counted door.

use super::guard::LockGuard;
use super::token::ReleaseToken;
use crate::error::Result;
use crate::events::{Emitter, EventKind, Subscription};
use std::cell::Cell;
use tracing::{debug, error, trace};

/// A reference-counted door that reports its lifecycle through events.
///
/// Every [`acquire`](Self::acquire) increments the count and returns a
/// [`ReleaseToken`] that decrements it exactly once. The door exists while
/// the count is positive.
///
/// | transition            | trigger  | events            |
/// |-----------------------|----------|-------------------|
/// | 0 → 1                 | acquire  | `create`, `up`    |
/// | n → n+1 (n > 0)       | acquire  | `up`              |
/// | n → n-1 (n > 1)       | release  | `down`            |
/// | 1 → 0                 | release  | `destroy`, `down` |
///
/// The count is updated before any event of the call is emitted, so
/// listeners observe the post-transition count.
///
/// `Locker` is neither `Send` nor `Sync`: a door belongs to one thread.
/// Listeners may call back into the same locker (acquire, release,
/// subscribe); nested emissions run inline before the outer call continues.
///
/// ```
/// use locker::{EventKind, Locker, Recorder};
///
/// let locker = Locker::new();
/// let recorder = Recorder::attach(&locker);
///
/// let t1 = locker.acquire();
/// let t2 = locker.acquire();
/// t1.release();
/// t1.release(); // no-op
/// t2.release();
///
/// assert!(!locker.is_locked());
/// assert_eq!(
///     recorder.take_kinds(),
///     vec![
///         EventKind::Create,
///         EventKind::Up,
///         EventKind::Up,
///         EventKind::Down,
///         EventKind::Destroy,
///         EventKind::Down,
///     ]
/// );
/// ```
#[derive(Debug, Default)]
pub struct Locker {
    count: Cell<usize>,
    emitter: Emitter,
}

impl Locker {
    /// Create an unlocked door with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take one lock on the door.
    ///
    /// Emits `create` first if the door was unlocked, then `up`.
    pub fn acquire(&self) -> ReleaseToken<'_> {
        let was_zero = self.count.get() == 0;
        let count = self.count.get() + 1;
        self.count.set(count);

        if was_zero {
            debug!("door created");
            self.emitter.emit(EventKind::Create);
        }
        trace!(count, "lock acquired");
        self.emitter.emit(EventKind::Up);

        ReleaseToken::new(self)
    }

    /// Take one lock that is released when the returned guard is dropped.
    pub fn lock(&self) -> LockGuard<'_> {
        self.acquire().into_guard()
    }

    /// Number of locks currently held.
    pub fn count(&self) -> usize {
        self.count.get()
    }

    /// Whether any lock is held.
    pub fn is_locked(&self) -> bool {
        self.count() != 0
    }

    /// Register `listener` to run whenever `kind` fires.
    ///
    /// See [`Emitter`] for ordering and snapshot rules.
    pub fn subscribe<F>(&self, kind: EventKind, listener: F) -> Subscription
    where
        F: Fn() + 'static,
    {
        self.emitter.subscribe(kind, listener)
    }

    /// Register a listener by event name.
    ///
    /// Fails with [`LockerError::InvalidEventKind`](crate::error::LockerError::InvalidEventKind)
    /// for names outside `create`, `up`, `destroy`, `down`; nothing is
    /// registered in that case.
    pub fn subscribe_named<F>(&self, kind: &str, listener: F) -> Result<Subscription>
    where
        F: Fn() + 'static,
    {
        let kind: EventKind = kind.parse()?;
        Ok(self.subscribe(kind, listener))
    }

    /// Remove a listener. Returns `false` if it was already removed.
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        self.emitter.unsubscribe(subscription)
    }

    /// Number of listeners registered for `kind`.
    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.emitter.listener_count(kind)
    }

    /// Give back one lock. Only reachable through a token's first release.
    pub(super) fn release_one(&self) {
        debug_assert!(
            self.count.get() > 0,
            "release with no outstanding locks"
        );
        let Some(count) = self.count.get().checked_sub(1) else {
            error!("release with no outstanding locks; count left at 0");
            return;
        };
        self.count.set(count);

        if count == 0 {
            debug!("door destroyed");
            self.emitter.emit(EventKind::Destroy);
        }
        trace!(count, "lock released");
        self.emitter.emit(EventKind::Down);
    }
}
