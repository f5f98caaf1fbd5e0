//! Single-use release capability.

use super::counter::Locker;
use super::guard::LockGuard;
use std::cell::Cell;

/// Capability to give back exactly one lock on a [`Locker`].
///
/// The first [`release`](Self::release) decrements the count; every later
/// call does nothing. Dropping an unreleased token leaves the lock held;
/// use [`into_guard`](Self::into_guard) for release-on-drop.
#[derive(Debug)]
#[must_use = "dropping a release token without releasing it leaves the door locked"]
pub struct ReleaseToken<'a> {
    locker: &'a Locker,
    consumed: Cell<bool>,
}

impl<'a> ReleaseToken<'a> {
    pub(super) fn new(locker: &'a Locker) -> Self {
        Self {
            locker,
            consumed: Cell::new(false),
        }
    }

    /// Give back the lock. Emits `destroy` (if this was the last lock) and
    /// then `down`. Calling it again is a no-op and emits nothing.
    pub fn release(&self) {
        if self.consumed.replace(true) {
            return;
        }
        self.locker.release_one();
    }

    /// Whether the lock has already been given back.
    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }

    /// The locker this token belongs to.
    pub fn locker(&self) -> &'a Locker {
        self.locker
    }

    /// Wrap the token in a guard that releases it on drop.
    pub fn into_guard(self) -> LockGuard<'a> {
        LockGuard::new(self)
    }
}
