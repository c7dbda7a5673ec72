//! Building and simulation configuration.
//!
//! The dwell and capacity constants are part of the core's contract: they are
//! named, overridable parameters of [`BuildingConfig`], never literals buried
//! in the dispatch algorithm.

use crate::{Floor, Tick};

/// Ticks a car's doors stay open at a regular floor.
pub const DOOR_DWELL_TICKS: u32 = 5;

/// Ticks a car's doors stay open at the lobby.  Strictly greater than
/// [`DOOR_DWELL_TICKS`] — lobby stops batch more boardings.
pub const LOBBY_DWELL_TICKS: u32 = 30;

/// Maximum passengers aboard one car.
pub const ELEVATOR_CAPACITY: usize = 10;

// ── BuildingConfig ────────────────────────────────────────────────────────────

/// Static description of the building and its elevator bank.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildingConfig {
    /// Number of floors, numbered `1..=num_floors`.
    pub num_floors: u16,

    /// Number of cars in the bank.
    pub num_elevators: u16,

    /// Maximum passengers aboard one car.
    pub capacity: usize,

    /// Door dwell at regular floors, in ticks.
    pub door_dwell_ticks: u32,

    /// Door dwell at the lobby, in ticks.
    pub lobby_dwell_ticks: u32,
}

impl Default for BuildingConfig {
    fn default() -> Self {
        Self {
            num_floors:        10,
            num_elevators:     2,
            capacity:          ELEVATOR_CAPACITY,
            door_dwell_ticks:  DOOR_DWELL_TICKS,
            lobby_dwell_ticks: LOBBY_DWELL_TICKS,
        }
    }
}

impl BuildingConfig {
    /// The highest floor.
    #[inline]
    pub fn top_floor(&self) -> Floor {
        Floor(self.num_floors)
    }

    /// `true` if `floor` lies inside the building.
    #[inline]
    pub fn contains(&self, floor: Floor) -> bool {
        (1..=self.num_floors).contains(&floor.0)
    }

    /// Door dwell for a stop at `floor`: the lobby dwell at the ground
    /// floor, the regular dwell everywhere else.
    #[inline]
    pub fn dwell_at(&self, floor: Floor) -> u32 {
        if floor.is_ground() {
            self.lobby_dwell_ticks
        } else {
            self.door_dwell_ticks
        }
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation run configuration.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// The building being simulated.
    pub building: BuildingConfig,

    /// Total ticks to simulate.
    pub total_ticks: u64,

    /// Master RNG seed for the traffic model.  The same seed always produces
    /// identical results.
    pub seed: u64,

    /// Emit a state snapshot to observers every N ticks.  0 disables
    /// snapshots.
    pub output_interval_ticks: u64,
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }
}
