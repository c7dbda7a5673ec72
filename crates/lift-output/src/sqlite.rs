//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! four tables: `tick_summaries`, `elevator_snapshots`, `elevator_stats`,
//! and `passenger_times`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{ElevatorSnapshotRow, ElevatorStatsRow, OutputResult, PassengerTimesRow, TickSummaryRow};

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS tick_summaries (
                 tick           INTEGER PRIMARY KEY,
                 calls_injected INTEGER NOT NULL,
                 waiting        INTEGER NOT NULL,
                 riding         INTEGER NOT NULL,
                 arrived        INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS elevator_snapshots (
                 elevator_id   INTEGER NOT NULL,
                 tick          INTEGER NOT NULL,
                 floor         INTEGER NOT NULL,
                 direction     INTEGER NOT NULL,
                 door_open     INTEGER NOT NULL,
                 occupancy     INTEGER NOT NULL,
                 pending_stops INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS elevator_stats (
                 elevator_id        INTEGER PRIMARY KEY,
                 passengers_served  INTEGER NOT NULL,
                 ticks_in_operation INTEGER NOT NULL,
                 stops_made         INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS passenger_times (
                 passenger_id      INTEGER PRIMARY KEY,
                 start_floor       INTEGER NOT NULL,
                 destination_floor INTEGER NOT NULL,
                 wait_ticks        INTEGER NOT NULL,
                 ride_ticks        INTEGER NOT NULL,
                 total_ticks       INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO tick_summaries (tick, calls_injected, waiting, riding, arrived) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![row.tick, row.calls_injected, row.waiting, row.riding, row.arrived],
        )?;
        Ok(())
    }

    fn write_snapshots(&mut self, rows: &[ElevatorSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO elevator_snapshots \
                 (elevator_id, tick, floor, direction, door_open, occupancy, pending_stops) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.elevator_id,
                    row.tick,
                    row.floor,
                    row.direction,
                    row.door_open as i64,
                    row.occupancy,
                    row.pending_stops,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_elevator_stats(&mut self, rows: &[ElevatorStatsRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO elevator_stats \
                 (elevator_id, passengers_served, ticks_in_operation, stops_made) \
                 VALUES (?1, ?2, ?3, ?4)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.elevator_id,
                    row.passengers_served,
                    row.ticks_in_operation,
                    row.stops_made,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_passenger_times(&mut self, rows: &[PassengerTimesRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO passenger_times \
                 (passenger_id, start_floor, destination_floor, wait_ticks, ride_ticks, total_ticks) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.passenger_id,
                    row.start_floor,
                    row.destination_floor,
                    row.wait_ticks,
                    row.ride_ticks,
                    row.total_ticks,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
