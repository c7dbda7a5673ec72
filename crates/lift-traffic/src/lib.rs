//! `lift-traffic` — the call-generation collaborator for `rust_lift`.
//!
//! The dispatch core consumes a [`CallSchedule`]: a map from tick to the
//! calls issued at that tick.  This crate produces schedules two ways:
//!
//! - [`generate`] — a random traffic model: lobby up-traffic at random
//!   times plus uniformly spaced calls from the upper floors, with
//!   lognormally distributed party sizes.  Deterministic for a given seed.
//! - [`load_calls_reader`]/[`load_calls_path`] — CSV input for replayable,
//!   hand-written scenarios.
//!
//! Both reject calls whose start and destination floors coincide — the core
//! leaves that case unspecified, so this boundary filters it out.

pub mod error;
pub mod generator;
pub mod loader;
pub mod schedule;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{TrafficError, TrafficResult};
pub use generator::{generate, lognormal_party_sizes, TrafficConfig};
pub use loader::{load_calls_path, load_calls_reader};
pub use schedule::{CallRequest, CallSchedule};
