//! CSV output backend.
//!
//! Creates four files in the configured output directory:
//! - `tick_summaries.csv` — one row per tick;
//! - `elevator_snapshots.csv` — one row per car per snapshot interval;
//! - `elevator_stats.csv` — one row per car at the end of the run;
//! - `passenger_times.csv` — one row per passenger at the end of the run.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{ElevatorSnapshotRow, ElevatorStatsRow, OutputResult, PassengerTimesRow, TickSummaryRow};

/// Writes simulation output to four CSV files.
pub struct CsvWriter {
    summaries:  Writer<File>,
    snapshots:  Writer<File>,
    stats:      Writer<File>,
    passengers: Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Open (or create) the four CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(["tick", "calls_injected", "waiting", "riding", "arrived"])?;

        let mut snapshots = Writer::from_path(dir.join("elevator_snapshots.csv"))?;
        snapshots.write_record([
            "elevator_id", "tick", "floor", "direction", "door_open", "occupancy", "pending_stops",
        ])?;

        let mut stats = Writer::from_path(dir.join("elevator_stats.csv"))?;
        stats.write_record(["elevator_id", "passengers_served", "ticks_in_operation", "stops_made"])?;

        let mut passengers = Writer::from_path(dir.join("passenger_times.csv"))?;
        passengers.write_record([
            "passenger_id", "start_floor", "destination_floor", "wait_ticks", "ride_ticks", "total_ticks",
        ])?;

        Ok(Self {
            summaries,
            snapshots,
            stats,
            passengers,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.calls_injected.to_string(),
            row.waiting.to_string(),
            row.riding.to_string(),
            row.arrived.to_string(),
        ])?;
        Ok(())
    }

    fn write_snapshots(&mut self, rows: &[ElevatorSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.elevator_id.to_string(),
                row.tick.to_string(),
                row.floor.to_string(),
                row.direction.to_string(),
                (row.door_open as u8).to_string(),
                row.occupancy.to_string(),
                row.pending_stops.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_elevator_stats(&mut self, rows: &[ElevatorStatsRow]) -> OutputResult<()> {
        for row in rows {
            self.stats.write_record(&[
                row.elevator_id.to_string(),
                row.passengers_served.to_string(),
                row.ticks_in_operation.to_string(),
                row.stops_made.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_passenger_times(&mut self, rows: &[PassengerTimesRow]) -> OutputResult<()> {
        for row in rows {
            self.passengers.write_record(&[
                row.passenger_id.to_string(),
                row.start_floor.to_string(),
                row.destination_floor.to_string(),
                row.wait_ticks.to_string(),
                row.ride_ticks.to_string(),
                row.total_ticks.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.summaries.flush()?;
        self.snapshots.flush()?;
        self.stats.flush()?;
        self.passengers.flush()?;
        Ok(())
    }
}
