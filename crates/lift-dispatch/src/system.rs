//! `ElevatorSystem` — owns the cars, the call board, and the registry, and
//! advances the whole simulation by one tick.

use lift_core::{BuildingConfig, ElevatorId, PassengerId, Tick};

use crate::{CallBoard, Elevator, Passenger, PassengerRegistry, SystemStats};

/// The whole bank: every car plus the floor queues and passenger registry
/// they share.
#[derive(Debug)]
pub struct ElevatorSystem {
    config: BuildingConfig,
    elevators: Vec<Elevator>,
    calls: CallBoard,
    passengers: PassengerRegistry,
    now: Tick,
}

impl ElevatorSystem {
    pub fn new(config: BuildingConfig) -> Self {
        let elevators = (0..config.num_elevators)
            .map(|i| Elevator::new(ElevatorId(i), config))
            .collect();
        Self {
            config,
            elevators,
            calls: CallBoard::new(),
            passengers: PassengerRegistry::new(),
            now: Tick::ZERO,
        }
    }

    // ── Call submission ───────────────────────────────────────────────────

    /// A passenger calls an elevator: append it to its start floor's FIFO
    /// queue and to the registry.  No car reacts until the next tick.
    ///
    /// The core does not validate the passenger's floors; the injection
    /// boundary is responsible for that.
    pub fn submit_call(&mut self, passenger: Passenger) -> PassengerId {
        let start = passenger.start();
        let id = self.passengers.push(passenger);
        self.calls.push(start, id);
        id
    }

    // ── Tick advancement ──────────────────────────────────────────────────

    /// Advance the system by one tick: every elevator in index order, then
    /// every passenger in registration order.
    ///
    /// The two-phase ordering is an explicit contract — all movement and
    /// boarding for the tick completes before any timer accounting.
    pub fn step(&mut self) {
        self.now = self.now + 1;
        for elevator in &mut self.elevators {
            elevator.step(&mut self.calls, &mut self.passengers);
        }
        for passenger in self.passengers.iter_mut() {
            passenger.record_tick();
        }
    }

    /// Advance `n` ticks with no external call injection.
    pub fn run(&mut self, n: u64) {
        for _ in 0..n {
            self.step();
        }
    }

    // ── Statistics ────────────────────────────────────────────────────────

    /// Derive wait/ride-time statistics over the registry plus per-car
    /// counters.  Pure read; zero-valued aggregates when no passengers exist.
    pub fn stats(&self) -> SystemStats {
        SystemStats::collect(&self.elevators, &self.passengers)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn now(&self) -> Tick {
        self.now
    }

    #[inline]
    pub fn config(&self) -> &BuildingConfig {
        &self.config
    }

    pub fn elevators(&self) -> &[Elevator] {
        &self.elevators
    }

    pub fn elevator(&self, id: ElevatorId) -> &Elevator {
        &self.elevators[id.index()]
    }

    pub fn calls(&self) -> &CallBoard {
        &self.calls
    }

    pub fn passengers(&self) -> &PassengerRegistry {
        &self.passengers
    }
}
