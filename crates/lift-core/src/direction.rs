//! Elevator travel direction and the pick-up compatibility test.

use std::fmt;

use crate::Floor;

/// Which way a car is (or is about to be) moving.
///
/// `Idle` is the "no commitment" state: an idle car accepts passengers bound
/// in either direction, and its first boarding decides the direction for the
/// rest of that floor scan.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    #[default]
    Idle,
}

impl Direction {
    /// Signed floor delta of one tick of movement in this direction.
    #[inline]
    pub fn delta(self) -> i16 {
        match self {
            Direction::Up => 1,
            Direction::Down => -1,
            Direction::Idle => 0,
        }
    }

    /// The direction a car at `from` must move to reach `to`.
    ///
    /// Returns `Idle` when the floors are equal.
    #[inline]
    pub fn toward(from: Floor, to: Floor) -> Direction {
        match to.cmp(&from) {
            std::cmp::Ordering::Greater => Direction::Up,
            std::cmp::Ordering::Less => Direction::Down,
            std::cmp::Ordering::Equal => Direction::Idle,
        }
    }

    /// `true` if this direction is compatible with upward travel (up or idle).
    #[inline]
    pub fn allows_up(self) -> bool {
        matches!(self, Direction::Up | Direction::Idle)
    }

    /// `true` if this direction is compatible with downward travel (down or idle).
    #[inline]
    pub fn allows_down(self) -> bool {
        matches!(self, Direction::Down | Direction::Idle)
    }

    /// The travel-compatibility test used when scanning a floor's queue:
    /// a passenger standing at `at` with destination `dest` may board a car
    /// whose direction is `self` iff the car is up-or-idle and the passenger
    /// is headed up, or down-or-idle and the passenger is headed down.
    ///
    /// A passenger whose destination equals `at` is never accepted.
    #[inline]
    pub fn accepts(self, at: Floor, dest: Floor) -> bool {
        (self.allows_up() && dest > at) || (self.allows_down() && dest < at)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Idle => "idle",
        };
        f.write_str(s)
    }
}
