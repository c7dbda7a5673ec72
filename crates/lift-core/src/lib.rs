//! `lift-core` — foundational types for the `rust_lift` elevator simulation.
//!
//! This crate is a dependency of every other `lift-*` crate.  It intentionally
//! has no `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`ids`]       | `ElevatorId`, `PassengerId`                             |
//! | [`floor`]     | `Floor` (1-based building floor number)                 |
//! | [`direction`] | `Direction` and the travel-compatibility test           |
//! | [`time`]      | `Tick`                                                  |
//! | [`config`]    | `BuildingConfig`, `SimConfig`, dwell/capacity defaults  |
//! | [`rng`]       | `SimRng` (seeded traffic-model RNG)                     |
//! | [`error`]     | `LiftError`, `LiftResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod direction;
pub mod error;
pub mod floor;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{
    BuildingConfig, SimConfig, DOOR_DWELL_TICKS, ELEVATOR_CAPACITY, LOBBY_DWELL_TICKS,
};
pub use direction::Direction;
pub use error::{LiftError, LiftResult};
pub use floor::Floor;
pub use ids::{ElevatorId, PassengerId};
pub use rng::SimRng;
pub use time::Tick;
