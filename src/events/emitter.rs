//! Synchronous publish/subscribe table keyed by [`EventKind`].

use super::kind::EventKind;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Source of per-emitter identities, so a handle only matches its issuer.
static NEXT_EMITTER_ID: AtomicU64 = AtomicU64::new(0);

/// A registered listener. Listeners receive no payload.
pub type Listener = Rc<dyn Fn()>;

/// Handle returned by [`Emitter::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription {
    emitter: u64,
    id: u64,
    kind: EventKind,
}

impl Subscription {
    /// The event kind this subscription listens to.
    pub fn kind(&self) -> EventKind {
        self.kind
    }
}

struct Registration {
    id: u64,
    kind: EventKind,
    listener: Listener,
}

/// Listener registry with synchronous, in-order dispatch.
///
/// # Dispatch policy
///
/// - Listeners for a kind run in registration order.
/// - [`emit`](Self::emit) snapshots the listeners for the kind before
///   invoking any of them. A listener subscribed during an emission does not
///   run in that pass; a listener unsubscribed during an emission still runs
///   in that pass if it was part of the snapshot.
/// - Subscribing the same closure twice registers it twice.
/// - No borrow of the registry is held while a listener runs, so listeners
///   may subscribe, unsubscribe, or trigger nested emissions.
pub struct Emitter {
    id: u64,
    registrations: RefCell<Vec<Registration>>,
    next_id: Cell<u64>,
}

impl Default for Emitter {
    fn default() -> Self {
        Self {
            id: NEXT_EMITTER_ID.fetch_add(1, Ordering::Relaxed),
            registrations: RefCell::default(),
            next_id: Cell::new(0),
        }
    }
}

impl Emitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` for `kind`.
    pub fn subscribe<F>(&self, kind: EventKind, listener: F) -> Subscription
    where
        F: Fn() + 'static,
    {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        self.registrations.borrow_mut().push(Registration {
            id,
            kind,
            listener: Rc::new(listener),
        });

        Subscription {
            emitter: self.id,
            id,
            kind,
        }
    }

    /// Remove a subscription. Returns `false` if it was already removed or
    /// was issued by a different emitter.
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        if subscription.emitter != self.id {
            return false;
        }
        let mut registrations = self.registrations.borrow_mut();
        let before = registrations.len();
        registrations.retain(|r| r.id != subscription.id);
        registrations.len() != before
    }

    /// Number of listeners currently registered for `kind`.
    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.registrations
            .borrow()
            .iter()
            .filter(|r| r.kind == kind)
            .count()
    }

    /// Invoke every listener registered for `kind`, in registration order.
    pub fn emit(&self, kind: EventKind) {
        let snapshot: Vec<Listener> = self
            .registrations
            .borrow()
            .iter()
            .filter(|r| r.kind == kind)
            .map(|r| Rc::clone(&r.listener))
            .collect();

        for listener in snapshot {
            listener();
        }
    }
}

impl std::fmt::Debug for Emitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let registrations = self.registrations.borrow();
        let mut map = f.debug_map();
        for kind in EventKind::ALL {
            let count = registrations.iter().filter(|r| r.kind == kind).count();
            map.entry(&kind.as_str(), &count);
        }
        map.finish()
    }
}
