//! `CallSchedule` — sparse per-tick queue of pending elevator calls.
//!
//! Most ticks see no calls, so the schedule is a `BTreeMap` keyed by tick
//! rather than a dense per-tick vector: the driver drains only the ticks
//! that actually have entries, and iteration order is chronological for
//! free.

use std::collections::BTreeMap;

use lift_core::{Floor, Tick};

/// One future call: where the passenger stands and where it wants to go.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CallRequest {
    pub start: Floor,
    pub destination: Floor,
}

/// Tick → calls issued at that tick, in issue order.
#[derive(Debug, Default)]
pub struct CallSchedule {
    inner: BTreeMap<Tick, Vec<CallRequest>>,
    /// Cached total call count for O(1) `len()`.
    total: usize,
}

impl CallSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `call` for `tick`.
    pub fn push(&mut self, tick: Tick, call: CallRequest) {
        self.inner.entry(tick).or_default().push(call);
        self.total += 1;
    }

    /// Remove and return all calls scheduled for exactly `tick`.
    ///
    /// Returns `None` if that tick has none (the common case — avoids
    /// allocation).
    pub fn drain_tick(&mut self, tick: Tick) -> Option<Vec<CallRequest>> {
        let calls = self.inner.remove(&tick)?;
        self.total -= calls.len();
        Some(calls)
    }

    /// Fold another schedule into this one, preserving per-tick issue order
    /// within each source.
    pub fn merge(&mut self, other: CallSchedule) {
        for (tick, calls) in other.inner {
            self.total += calls.len();
            self.inner.entry(tick).or_default().extend(calls);
        }
    }

    /// The earliest tick with at least one pending call, or `None` if empty.
    pub fn next_tick(&self) -> Option<Tick> {
        self.inner.keys().next().copied()
    }

    /// Chronological view of all pending calls.
    pub fn iter(&self) -> impl Iterator<Item = (Tick, &[CallRequest])> {
        self.inner.iter().map(|(&t, calls)| (t, calls.as_slice()))
    }

    /// Total pending calls across all ticks.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of distinct ticks that have at least one pending call.
    pub fn tick_count(&self) -> usize {
        self.inner.len()
    }
}
