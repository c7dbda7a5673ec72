//! Building floor numbers.
//!
//! Floors are numbered `1..=num_floors`, bottom to top; floor 1 is the lobby.
//! `Floor` is deliberately not a [`typed id`][crate::ids] — it supports
//! directional arithmetic, which plain identifiers must not.

use std::fmt;

use crate::Direction;

/// A 1-based building floor number.
///
/// `Floor(0)` is never a valid floor; arithmetic that would produce it (or
/// overflow the top) is surfaced through [`Floor::offset`] returning `None`
/// so callers must range-check against their building's floor count.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Floor(pub u16);

impl Floor {
    /// The ground floor (lobby).
    pub const GROUND: Floor = Floor(1);

    /// `true` for the lobby — stops here use the longer lobby door dwell.
    #[inline]
    pub fn is_ground(self) -> bool {
        self == Floor::GROUND
    }

    /// The floor one step in `direction`, or `None` on underflow.
    ///
    /// `Direction::Idle` yields `Some(self)`.  The result may still lie
    /// outside the building; callers check with
    /// [`BuildingConfig::contains`][crate::BuildingConfig::contains].
    #[inline]
    pub fn offset(self, direction: Direction) -> Option<Floor> {
        self.0.checked_add_signed(direction.delta()).map(Floor)
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}
