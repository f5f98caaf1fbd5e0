//! RAII lock guard implementation.

use super::counter::Locker;
use super::token::ReleaseToken;

/// RAII guard for one lock on a [`Locker`].
///
/// When dropped, the lock is released unless it was released already.
#[derive(Debug)]
#[must_use = "the lock is released as soon as the guard is dropped"]
pub struct LockGuard<'a> {
    token: ReleaseToken<'a>,
}

impl<'a> LockGuard<'a> {
    pub(super) fn new(token: ReleaseToken<'a>) -> Self {
        Self { token }
    }

    /// The locker this guard holds a lock on.
    pub fn locker(&self) -> &'a Locker {
        self.token.locker()
    }

    /// Whether the lock has already been given back.
    pub fn is_released(&self) -> bool {
        self.token.is_consumed()
    }

    /// Manually release the lock before the guard goes out of scope.
    pub fn release(self) {
        self.token.release();
    }
}

impl Drop for LockGuard<'_> {
    fn drop(&mut self) {
        self.token.release();
    }
}
