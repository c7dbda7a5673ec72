//! The `OutputWriter` trait implemented by all backend writers.

use crate::{ElevatorSnapshotRow, ElevatorStatsRow, OutputResult, PassengerTimesRow, TickSummaryRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// Errors never reach the simulation loop — the driving observer stores them
/// internally and hands them back through
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Write a batch of elevator snapshots.
    fn write_snapshots(&mut self, rows: &[ElevatorSnapshotRow]) -> OutputResult<()>;

    /// Write the final per-car counters.
    fn write_elevator_stats(&mut self, rows: &[ElevatorStatsRow]) -> OutputResult<()>;

    /// Write the final per-passenger timings.
    fn write_passenger_times(&mut self, rows: &[PassengerTimesRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
