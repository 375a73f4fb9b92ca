//! Append-only event log.
//!
//! Both Orinx components publish their state changes exclusively through an
//! [`EventLog`]: an immutable, ledger-ordered sequence of records that
//! off-ledger scanners read by range. Entries are never mutated or deleted,
//! and their order is assignment order, not re-sortable.

use parking_lot::RwLock;

use crate::constants::FIRST_SEQUENCE;

/// An event stamped with its position in the log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sequenced<E> {
    /// Ledger-order sequence number, starting at [`FIRST_SEQUENCE`].
    pub seq: u64,
    /// The emitted event.
    pub event: E,
}

/// Append-only, totally ordered event log.
///
/// Sequence numbers are dense: the `n`-th appended event carries sequence
/// `n` (1-based). The log is write-only from the emitting component's point
/// of view; nothing is ever recomputed from it internally.
#[derive(Debug)]
pub struct EventLog<E> {
    entries: RwLock<Vec<Sequenced<E>>>,
}

impl<E> Default for EventLog<E> {
    fn default() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }
}

impl<E: Clone> EventLog<E> {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Appends an event and returns its assigned sequence number.
    pub fn append(&self, event: E) -> u64 {
        let mut entries = self.entries.write();
        let seq = entries.len() as u64 + FIRST_SEQUENCE;
        entries.push(Sequenced { seq, event });
        seq
    }

    /// Returns the event at `seq`, if one has been emitted.
    pub fn get(&self, seq: u64) -> Option<Sequenced<E>> {
        if seq < FIRST_SEQUENCE {
            return None;
        }
        self.entries
            .read()
            .get((seq - FIRST_SEQUENCE) as usize)
            .cloned()
    }

    /// Returns all events with `start <= seq <= end`, in ledger order.
    pub fn range(&self, start: u64, end: u64) -> Vec<Sequenced<E>> {
        let entries = self.entries.read();
        entries
            .iter()
            .filter(|e| e.seq >= start && e.seq <= end)
            .cloned()
            .collect()
    }

    /// Returns the full history in ledger order.
    pub fn all(&self) -> Vec<Sequenced<E>> {
        self.entries.read().clone()
    }

    /// Returns the number of events emitted so far.
    pub fn len(&self) -> u64 {
        self.entries.read().len() as u64
    }

    /// Returns true if nothing has been emitted.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
