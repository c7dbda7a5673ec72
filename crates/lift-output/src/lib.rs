//! `lift-output` — simulation output writers for the rust_lift workspace.
//!
//! Two backends are provided behind Cargo features:
//!
//! | Feature  | Backend | Files created                                     |
//! |----------|---------|---------------------------------------------------|
//! | *(none)* | CSV     | `tick_summaries.csv`, `elevator_snapshots.csv`, `elevator_stats.csv`, `passenger_times.csv` |
//! | `sqlite` | SQLite  | `output.db`                                       |
//!
//! Both backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `lift_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lift_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{ElevatorSnapshotRow, ElevatorStatsRow, PassengerTimesRow, TickSummaryRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
