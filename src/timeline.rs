//! Virtual Timeline
//!
//! A deterministic millisecond clock with a queue of delayed events.
//! Front-ends decide how real time maps onto it: tests call `advance`
//! directly, the CLI sleeps on tokio timers, the web UI arms a browser
//! timeout for the next deadline.

use serde::Serialize;
use std::collections::BTreeMap;

/// Handle for a scheduled event
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TimerId(u64);

/// A queue of events keyed by their due time
///
/// Events due at the same instant fire in the order they were scheduled.
/// There is no cancellation: once scheduled, an event is always delivered,
/// and the receiver is responsible for checking that its target still exists.
#[derive(Debug, Clone)]
pub struct Timeline<E> {
    now: u64,
    next_seq: u64,
    pending: BTreeMap<(u64, u64), E>,
}

impl<E> Timeline<E> {
    /// Create an empty timeline starting at t = 0
    pub fn new() -> Self {
        Self {
            now: 0,
            next_seq: 0,
            pending: BTreeMap::new(),
        }
    }

    /// Current virtual time in milliseconds
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Schedule `event` to fire `delay_ms` after the current time
    pub fn schedule(&mut self, delay_ms: u64, event: E) -> TimerId {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.insert((self.now.saturating_add(delay_ms), seq), event);
        TimerId(seq)
    }

    /// Due time of the earliest pending event
    pub fn next_deadline(&self) -> Option<u64> {
        self.pending.keys().next().map(|(due, _)| *due)
    }

    /// Number of events not yet delivered
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// Pop the earliest event due at or before `until`, moving the clock to
    /// its due time.
    ///
    /// Callers loop on this so events scheduled by a handler inside the
    /// window are delivered in the same pass.
    pub fn pop_due(&mut self, until: u64) -> Option<(u64, E)> {
        let (&(due, seq), _) = self.pending.iter().next()?;
        if due > until {
            return None;
        }
        let event = self.pending.remove(&(due, seq))?;
        self.now = self.now.max(due);
        Some((due, event))
    }

    /// Move the clock forward without delivering anything.
    ///
    /// Never moves backwards and never jumps past a pending deadline.
    pub fn advance_clock(&mut self, to: u64) {
        let limit = self.next_deadline().map_or(to, |due| due.min(to));
        self.now = self.now.max(limit);
    }
}

impl<E> Default for Timeline<E> {
    fn default() -> Self {
        Self::new()
    }
}
