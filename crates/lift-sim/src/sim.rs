//! The `Sim` struct and its tick loop.

use lift_core::SimConfig;
use lift_dispatch::{ElevatorSystem, Passenger};
use lift_traffic::CallSchedule;

use crate::SimObserver;

/// The simulation runner: an [`ElevatorSystem`] plus the schedule of calls
/// to feed it and the run configuration.
///
/// Create via [`SimBuilder`][crate::SimBuilder], which validates the config
/// and every scheduled call up front.
#[derive(Debug)]
pub struct Sim {
    /// Global configuration (building, total ticks, seed, …).
    pub config: SimConfig,

    /// The dispatch core being driven.
    pub system: ElevatorSystem,

    /// Calls not yet injected, keyed by tick.
    pub schedule: CallSchedule,
}

impl Sim {
    /// Run from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary, then `on_sim_end` once.
    /// Use [`NoopObserver`][crate::NoopObserver] if you don't need
    /// callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        log::info!(
            "running {} ticks: {} floors, {} cars, {} scheduled calls",
            self.config.total_ticks,
            self.config.building.num_floors,
            self.config.building.num_elevators,
            self.schedule.len(),
        );

        while self.system.now() < self.config.end_tick() {
            self.tick_once(observer);
        }

        observer.on_sim_end(self.system.now(), &self.system);
        log::info!("run complete at {}", self.system.now());
    }

    /// Run exactly `n` ticks from the current position (ignores
    /// `end_tick`).  Useful for tests and incremental stepping.  Does not
    /// fire `on_sim_end`.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.tick_once(observer);
        }
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn tick_once<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.system.now();
        observer.on_tick_start(now);

        // Inject every call scheduled for this tick, in issue order, before
        // the system steps — an arrival "at time t" is dispatchable at t.
        let injected = match self.schedule.drain_tick(now) {
            None => 0,
            Some(calls) => {
                let n = calls.len();
                for call in calls {
                    self.system
                        .submit_call(Passenger::new(call.start, call.destination));
                }
                n
            }
        };

        self.system.step();
        observer.on_tick_end(now, injected, &self.system);

        if self.config.output_interval_ticks > 0
            && now.0.is_multiple_of(self.config.output_interval_ticks)
        {
            observer.on_snapshot(now, &self.system);
        }
    }
}
