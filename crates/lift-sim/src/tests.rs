//! Integration tests for the tick driver.

use lift_core::{BuildingConfig, Floor, SimConfig, Tick};
use lift_dispatch::ElevatorSystem;
use lift_traffic::{CallRequest, CallSchedule};

use crate::{NoopObserver, SimBuilder, SimError, SimObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn config(num_floors: u16, num_elevators: u16, total_ticks: u64) -> SimConfig {
    SimConfig {
        building: BuildingConfig {
            num_floors,
            num_elevators,
            ..Default::default()
        },
        total_ticks,
        seed: 42,
        output_interval_ticks: 0,
    }
}

fn one_call(tick: u64, start: u16, dest: u16) -> CallSchedule {
    let mut s = CallSchedule::new();
    s.push(
        Tick(tick),
        CallRequest { start: Floor(start), destination: Floor(dest) },
    );
    s
}

/// Observer that tallies every hook invocation.
#[derive(Default)]
struct CountingObserver {
    starts: usize,
    ends: usize,
    injected_total: usize,
    snapshots: Vec<Tick>,
    sim_end: Option<Tick>,
}

impl SimObserver for CountingObserver {
    fn on_tick_start(&mut self, _tick: Tick) {
        self.starts += 1;
    }

    fn on_tick_end(&mut self, _tick: Tick, injected: usize, _system: &ElevatorSystem) {
        self.ends += 1;
        self.injected_total += injected;
    }

    fn on_snapshot(&mut self, tick: Tick, _system: &ElevatorSystem) {
        self.snapshots.push(tick);
    }

    fn on_sim_end(&mut self, final_tick: Tick, _system: &ElevatorSystem) {
        self.sim_end = Some(final_tick);
    }
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use super::*;

    #[test]
    fn builds_with_defaults() {
        let sim = SimBuilder::new(config(5, 1, 10)).build().unwrap();
        assert_eq!(sim.system.elevators().len(), 1);
        assert_eq!(sim.system.now(), Tick::ZERO);
        assert!(sim.schedule.is_empty());
    }

    #[test]
    fn rejects_one_floor_building() {
        let err = SimBuilder::new(config(1, 1, 10)).build().unwrap_err();
        assert!(matches!(err, SimError::Config(_)));
    }

    #[test]
    fn rejects_zero_capacity() {
        let mut cfg = config(5, 1, 10);
        cfg.building.capacity = 0;
        let err = SimBuilder::new(cfg).build().unwrap_err();
        assert!(matches!(err, SimError::Config(_)));
    }

    #[test]
    fn rejects_out_of_range_call() {
        let err = SimBuilder::new(config(5, 1, 10))
            .schedule(one_call(3, 1, 6))
            .build()
            .unwrap_err();
        match err {
            SimError::CallOutOfRange { tick, floor, top } => {
                assert_eq!(tick, Tick(3));
                assert_eq!(floor, Floor(6));
                assert_eq!(top, Floor(5));
            }
            other => panic!("expected CallOutOfRange, got {other}"),
        }
    }

    #[test]
    fn rejects_same_floor_call() {
        let err = SimBuilder::new(config(5, 1, 10))
            .schedule(one_call(0, 2, 2))
            .build()
            .unwrap_err();
        assert!(matches!(err, SimError::SameFloorCall { .. }));
    }
}

// ── Tick loop ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run {
    use super::*;

    #[test]
    fn call_scheduled_at_tick_is_dispatchable_that_tick() {
        // Same timeline as the core's wait scenario: the call lands at tick
        // 0, and the car (parked at floor 1) reaches floor 2 during tick 1.
        let mut sim = SimBuilder::new(config(5, 1, 10))
            .schedule(one_call(0, 2, 3))
            .build()
            .unwrap();

        sim.run_ticks(1, &mut NoopObserver);
        assert_eq!(sim.system.now(), Tick(1));
        assert!(sim.schedule.is_empty());
        assert_eq!(sim.system.passengers().len(), 1);
        assert_eq!(sim.system.elevators()[0].current_floor, Floor(2));
    }

    #[test]
    fn observer_hooks_fire_in_order() {
        let mut cfg = config(5, 1, 10);
        cfg.output_interval_ticks = 2;
        let mut sim = SimBuilder::new(cfg)
            .schedule(one_call(4, 2, 5))
            .build()
            .unwrap();

        let mut obs = CountingObserver::default();
        sim.run(&mut obs);

        assert_eq!(obs.starts, 10);
        assert_eq!(obs.ends, 10);
        assert_eq!(obs.injected_total, 1);
        // Snapshots at ticks 0, 2, 4, 6, 8.
        assert_eq!(obs.snapshots, vec![Tick(0), Tick(2), Tick(4), Tick(6), Tick(8)]);
        assert_eq!(obs.sim_end, Some(Tick(10)));
    }

    #[test]
    fn run_delivers_everyone_and_reports() {
        let mut schedule = CallSchedule::new();
        schedule.push(Tick(0), CallRequest { start: Floor(1), destination: Floor(4) });
        schedule.push(Tick(2), CallRequest { start: Floor(3), destination: Floor(1) });
        schedule.push(Tick(10), CallRequest { start: Floor(2), destination: Floor(5) });

        let mut sim = SimBuilder::new(config(5, 2, 300))
            .schedule(schedule)
            .build()
            .unwrap();
        sim.run(&mut NoopObserver);

        assert_eq!(sim.system.now(), Tick(300));
        let tally = sim.system.passengers().phase_tally();
        assert_eq!(tally.arrived, 3, "tally: {tally:?}");

        let stats = sim.system.stats();
        assert!(stats.average_total_ticks >= stats.average_ride_ticks);
        assert!(stats.max_wait_ticks >= stats.min_wait_ticks);
        let served: u64 = stats.elevators.iter().map(|e| e.passengers_served).sum();
        assert_eq!(served, 3);
        for e in &stats.elevators {
            assert_eq!(e.ticks_in_operation, 300);
        }
    }

    #[test]
    fn generated_traffic_runs_to_completion() {
        let cfg = config(12, 3, 400);
        let schedule = lift_traffic::generate(
            &cfg.building,
            &lift_traffic::TrafficConfig {
                duration_ticks: 200,
                total_calls: 40,
                seed: 7,
            },
        )
        .unwrap();
        let scheduled = schedule.len();

        let mut sim = SimBuilder::new(cfg).schedule(schedule).build().unwrap();
        sim.run(&mut NoopObserver);

        assert_eq!(sim.system.passengers().len(), scheduled);
        for p in sim.system.passengers().iter() {
            assert_eq!(p.total_ticks(), p.wait_ticks + p.ride_ticks);
        }
        for car in sim.system.elevators() {
            assert!(car.occupancy() <= sim.system.config().capacity);
        }
    }
}
