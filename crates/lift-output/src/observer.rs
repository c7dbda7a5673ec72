//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use lift_core::Tick;
use lift_dispatch::ElevatorSystem;
use lift_sim::SimObserver;

use crate::row::{ElevatorSnapshotRow, ElevatorStatsRow, PassengerTimesRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes tick summaries, elevator snapshots, and
/// end-of-run statistics to any [`OutputWriter`] backend (CSV, SQLite).
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, injected: usize, system: &ElevatorSystem) {
        let tally = system.passengers().phase_tally();
        let row = TickSummaryRow {
            tick:           tick.0,
            calls_injected: injected as u64,
            waiting:        tally.waiting,
            riding:         tally.riding,
            arrived:        tally.arrived,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, system: &ElevatorSystem) {
        let rows: Vec<ElevatorSnapshotRow> = system
            .elevators()
            .iter()
            .map(|car| ElevatorSnapshotRow {
                elevator_id:   car.id.0,
                tick:          tick.0,
                floor:         car.current_floor.0,
                direction:     car.direction.delta() as i8,
                door_open:     car.door_open,
                occupancy:     car.occupancy() as u64,
                pending_stops: car.destinations.len() as u64,
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick, system: &ElevatorSystem) {
        let stats = system.stats();
        let car_rows: Vec<ElevatorStatsRow> = stats
            .elevators
            .iter()
            .map(|e| ElevatorStatsRow {
                elevator_id:        e.elevator_id.0,
                passengers_served:  e.passengers_served,
                ticks_in_operation: e.ticks_in_operation,
                stops_made:         e.stops_made,
            })
            .collect();
        let result = self.writer.write_elevator_stats(&car_rows);
        self.store_err(result);

        let passenger_rows: Vec<PassengerTimesRow> = system
            .passengers()
            .iter()
            .enumerate()
            .map(|(i, p)| PassengerTimesRow {
                passenger_id:      i as u32,
                start_floor:       p.start().0,
                destination_floor: p.destination().0,
                wait_ticks:        p.wait_ticks,
                ride_ticks:        p.ride_ticks,
                total_ticks:       p.total_ticks(),
            })
            .collect();
        let result = self.writer.write_passenger_times(&passenger_rows);
        self.store_err(result);

        let result = self.writer.finish();
        self.store_err(result);
    }
}
