//! `lift-dispatch` — the elevator dispatch core of `rust_lift`.
//!
//! This crate holds the only real decision-making in the repository: per-tick
//! direction selection, stop batching, capacity-constrained boarding, door
//! timing, and idle parking.  Everything else in the workspace feeds it
//! (`lift-traffic`) or reads it (`lift-output`).
//!
//! # Tick anatomy
//!
//! [`ElevatorSystem::step`] runs two phases in a fixed order:
//!
//! ```text
//! ① every Elevator, in index order:
//!      drop off → boundary redirect → pick up → door open → door close/move
//! ② every Passenger, in registration order:
//!      riding        → ride_ticks  += 1
//!      still waiting → wait_ticks  += 1
//!      arrived       → unchanged
//! ```
//!
//! The ordering is load-bearing: a passenger boarded in phase ① counts that
//! tick toward ride time, and a passenger alighted in phase ① counts it
//! toward neither timer.
//!
//! # Ownership model
//!
//! All passengers live in an append-only [`PassengerRegistry`] arena; cars
//! and floor queues hold [`PassengerId`][lift_core::PassengerId]s, and a
//! riding passenger holds a non-owning `Option<ElevatorId>` back-reference.
//! No `Rc` cycles, no aliasing.

pub mod board;
pub mod elevator;
pub mod passenger;
pub mod stats;
pub mod system;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use board::CallBoard;
pub use elevator::{parking_target, Elevator};
pub use passenger::{Passenger, PassengerRegistry, PhaseTally};
pub use stats::{ElevatorStats, SystemStats};
pub use system::ElevatorSystem;
