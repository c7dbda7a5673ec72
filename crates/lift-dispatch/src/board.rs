//! `CallBoard` — per-floor FIFO queues of waiting passengers.
//!
//! The board is the shared resource every car reads and mutates during its
//! step.  Because stepping is strictly sequential there is no race, but there
//! IS a mutation-during-iteration hazard: boarding removes entries from the
//! very queue the car is scanning.  [`CallBoard::snapshot`] exists for that —
//! cars scan a copy and mutate the live queue.
//!
//! Invariant: a passenger appears in at most one floor queue, and only while
//! waiting.  Once boarded it is removed and never re-enters any queue.

use std::collections::VecDeque;

use lift_core::{Floor, PassengerId};
use rustc_hash::FxHashMap;

/// Floor → FIFO queue of passengers waiting there.
#[derive(Debug, Default)]
pub struct CallBoard {
    inner: FxHashMap<Floor, VecDeque<PassengerId>>,
    /// Cached total entry count for O(1) `len()`.
    total: usize,
}

impl CallBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `passenger` to the back of `floor`'s queue, creating the queue
    /// if absent.
    pub fn push(&mut self, floor: Floor, passenger: PassengerId) {
        self.inner.entry(floor).or_default().push_back(passenger);
        self.total += 1;
    }

    /// A copy of `floor`'s queue in FIFO order, for scanning while the live
    /// queue is mutated.  Empty if nobody is waiting there.
    pub fn snapshot(&self, floor: Floor) -> Vec<PassengerId> {
        self.inner
            .get(&floor)
            .map(|q| q.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Remove `passenger` from `floor`'s queue.  Returns `false` if it was
    /// not queued there.
    pub fn remove(&mut self, floor: Floor, passenger: PassengerId) -> bool {
        let Some(queue) = self.inner.get_mut(&floor) else {
            return false;
        };
        match queue.iter().position(|&id| id == passenger) {
            Some(pos) => {
                queue.remove(pos);
                self.total -= 1;
                true
            }
            None => false,
        }
    }

    /// Number of passengers waiting at `floor`.
    pub fn waiting_at(&self, floor: Floor) -> usize {
        self.inner.get(&floor).map_or(0, |q| q.len())
    }

    /// Total waiting passengers across all floors.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
