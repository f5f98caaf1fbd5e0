//! Event records and a recorder that captures them from a locker.

use super::emitter::Subscription;
use super::kind::EventKind;
use crate::error::{LockerError, Result};
use crate::locks::Locker;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// A single observed event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Position in the recorder's stream, starting at 1.
    pub seq: u64,

    /// When the event was observed.
    pub ts: DateTime<Utc>,

    /// The event kind.
    pub kind: EventKind,
}

impl EventRecord {
    /// Serialize the record to a single-line JSON string.
    pub fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| {
            LockerError::UserError(format!("failed to serialize event to JSON: {}", e))
        })
    }
}

/// Captures every event a [`Locker`] emits, in emission order.
///
/// The recorder subscribes one listener per [`EventKind`] when attached.
/// Records accumulate until taken with [`take`](Self::take); sequence
/// numbers keep increasing across takes. Dropping the recorder unsubscribes
/// its listeners.
#[derive(Debug)]
pub struct Recorder<'a> {
    locker: &'a Locker,
    records: Rc<RefCell<Vec<EventRecord>>>,
    subscriptions: Vec<Subscription>,
}

impl<'a> Recorder<'a> {
    /// Subscribe to all event kinds on `locker`.
    pub fn attach(locker: &'a Locker) -> Self {
        let records: Rc<RefCell<Vec<EventRecord>>> = Rc::default();
        let next_seq = Rc::new(Cell::new(1u64));

        let subscriptions = EventKind::ALL
            .iter()
            .map(|&kind| {
                let records = Rc::clone(&records);
                let next_seq = Rc::clone(&next_seq);
                locker.subscribe(kind, move || {
                    let seq = next_seq.get();
                    next_seq.set(seq + 1);
                    records.borrow_mut().push(EventRecord {
                        seq,
                        ts: Utc::now(),
                        kind,
                    });
                })
            })
            .collect();

        Self {
            locker,
            records,
            subscriptions,
        }
    }

    /// Drain and return everything recorded so far.
    pub fn take(&self) -> Vec<EventRecord> {
        std::mem::take(&mut *self.records.borrow_mut())
    }

    /// Drain and return only the kinds recorded so far.
    pub fn take_kinds(&self) -> Vec<EventKind> {
        self.take().into_iter().map(|r| r.kind).collect()
    }

    /// Kinds recorded so far, without draining.
    pub fn kinds(&self) -> Vec<EventKind> {
        self.records.borrow().iter().map(|r| r.kind).collect()
    }

    /// Number of events recorded since the last take.
    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Unsubscribe and return the records captured since the last take.
    pub fn detach(self) -> Vec<EventRecord> {
        self.take()
    }
}

impl Drop for Recorder<'_> {
    fn drop(&mut self) {
        for subscription in self.subscriptions.drain(..) {
            self.locker.unsubscribe(subscription);
        }
    }
}
