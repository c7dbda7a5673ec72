//! `lift-sim` — tick driver for the rust_lift simulation.
//!
//! # Per-tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Inject  — drain the CallSchedule for this tick and submit each call
//!               to the ElevatorSystem.
//!   ② Step    — advance the system one tick (elevators, then passengers).
//!   ③ Observe — on_tick_end, plus on_snapshot every output interval.
//! ```
//!
//! Calls injected at tick `t` are visible to the elevators stepped during
//! that same tick's `step()`, matching an arrival event "at time t".
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::{BuildingConfig, SimConfig};
//! use lift_sim::{NoopObserver, SimBuilder};
//! use lift_traffic::{generate, TrafficConfig};
//!
//! let schedule = generate(&config.building, &traffic)?;
//! let mut sim = SimBuilder::new(config).schedule(schedule).build()?;
//! sim.run(&mut NoopObserver);
//! let stats = sim.system.stats();
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
