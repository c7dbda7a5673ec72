//! The per-elevator state machine — the core of the system.

use std::collections::BTreeSet;

use lift_core::{BuildingConfig, Direction, ElevatorId, Floor, PassengerId};

use crate::{CallBoard, PassengerRegistry};

// ── Parking policy ────────────────────────────────────────────────────────────

/// The idle-direction tie-break a car uses once it has no pending
/// destinations, evaluated in order:
///
/// 1. at the top floor → park at floor 1, moving down;
/// 2. at floor 1 → park at the top floor, moving up;
/// 3. otherwise, by identity parity — even cars default to floor 1, odd
///    cars to the top floor.
///
/// A pure function of (identity, floor count, current floor) so the policy
/// is testable in isolation.
pub fn parking_target(id: ElevatorId, num_floors: u16, at: Floor) -> (Floor, Direction) {
    let top = Floor(num_floors);
    if at == top {
        (Floor::GROUND, Direction::Down)
    } else if at.is_ground() {
        (top, Direction::Up)
    } else if id.is_even() {
        (Floor::GROUND, Direction::Down)
    } else {
        (top, Direction::Up)
    }
}

// ── Elevator ──────────────────────────────────────────────────────────────────

/// One car: owns its aboard passengers and its set of committed stops, and
/// runs the per-tick dispatch algorithm.
///
/// Invariants held between ticks:
/// - `aboard.len() <= config.capacity`;
/// - every aboard passenger's destination is in `destinations`;
/// - `current_floor` is within `[1, config.num_floors]`.
#[derive(Debug)]
pub struct Elevator {
    /// Identity; also this car's index in the system's car list.
    pub id: ElevatorId,

    config: BuildingConfig,

    pub current_floor: Floor,
    pub direction: Direction,

    pub door_open: bool,
    /// Ticks until the open door may close (floors at zero).
    pub door_timer: u32,

    /// Floors this car has committed to visiting.
    pub destinations: BTreeSet<Floor>,

    /// Passengers currently aboard, in boarding order.
    pub aboard: Vec<PassengerId>,

    // Counters reported by the statistics collaborator.
    pub ticks_in_operation: u64,
    /// Counted at boarding time: a boarded-but-not-yet-delivered passenger
    /// already counts as served.
    pub passengers_served: u64,
    pub stops_made: u64,
}

impl Elevator {
    /// Create a car at its deterministic initial position: even IDs start at
    /// floor 1, odd IDs at the top floor, spreading initial coverage.
    pub fn new(id: ElevatorId, config: BuildingConfig) -> Self {
        let current_floor = if id.is_even() {
            Floor::GROUND
        } else {
            config.top_floor()
        };
        Self {
            id,
            config,
            current_floor,
            direction: Direction::Idle,
            door_open: false,
            door_timer: 0,
            destinations: BTreeSet::new(),
            aboard: Vec::new(),
            ticks_in_operation: 0,
            passengers_served: 0,
            stops_made: 0,
        }
    }

    /// Number of passengers aboard.
    #[inline]
    pub fn occupancy(&self) -> usize {
        self.aboard.len()
    }

    /// `true` once the car carries its configured maximum.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.aboard.len() >= self.config.capacity
    }

    // ── Per-tick algorithm ────────────────────────────────────────────────

    /// Advance this car by one tick.
    ///
    /// Order is contractual: drop off, boundary redirect, pick up, door-open
    /// decision, door-close/move decision.  A door opened this tick leaves
    /// the timer positive, so the car holds; a timer reaching zero this tick
    /// closes the door and moves in the same tick.
    pub fn step(&mut self, calls: &mut CallBoard, passengers: &mut PassengerRegistry) {
        self.ticks_in_operation += 1;
        if self.door_timer > 0 {
            self.door_timer -= 1;
        }

        let dropped = if self.destinations.contains(&self.current_floor) {
            self.drop_off_arrivals(passengers)
        } else {
            0
        };

        // Boundary redirect — a direction hint only, no movement yet.
        if self.current_floor == self.config.top_floor() {
            self.direction = Direction::Down;
        } else if self.current_floor.is_ground() {
            self.direction = Direction::Up;
        }

        let boarded = self.pick_up_waiting(calls, passengers);

        if !self.door_open && (dropped > 0 || boarded > 0) {
            self.stops_made += 1;
            self.door_open = true;
            self.door_timer = self.config.dwell_at(self.current_floor);
        }

        if self.door_timer == 0 {
            self.door_open = false;

            if self.destinations.is_empty() {
                let (park, dir) = parking_target(self.id, self.config.num_floors, self.current_floor);
                self.destinations.insert(park);
                self.direction = dir;
            }

            match self.current_floor.offset(self.direction) {
                Some(next) if self.config.contains(next) => self.current_floor = next,
                // No destination reachable — cannot occur under the parking
                // policy, but clamp rather than walk out of the building.
                _ => self.direction = Direction::Idle,
            }

            for &id in &self.aboard {
                passengers.get_mut(id).current_floor = self.current_floor;
            }
        }
    }

    // ── Boarding and alighting ────────────────────────────────────────────

    /// Scan the queue at the current floor in FIFO order and board every
    /// direction-compatible passenger until the car is full.
    ///
    /// Each successful boarding re-aims the car toward that passenger's
    /// destination, which can change the compatibility test for the rest of
    /// the scan.  The first boarding failure (capacity reached) ends the
    /// scan; incompatible passengers before that point are skipped and stay
    /// queued.  Returns the number boarded.
    pub fn pick_up_waiting(
        &mut self,
        calls: &mut CallBoard,
        passengers: &mut PassengerRegistry,
    ) -> usize {
        let mut boarded = 0;
        // Boarding removes entries from the queue being scanned, so scan a
        // snapshot and mutate the live queue.
        for id in calls.snapshot(self.current_floor) {
            let dest = passengers.get(id).destination();
            if self.direction.accepts(self.current_floor, dest) {
                if self.board(id, calls, passengers) {
                    self.direction = Direction::toward(self.current_floor, dest);
                    boarded += 1;
                } else {
                    break;
                }
            }
        }
        boarded
    }

    /// Board one waiting passenger if there is room.
    ///
    /// On success: removes the passenger from the floor queue, takes it
    /// aboard, commits its destination, and counts it as served.  Returns
    /// `false` when the car is full — a normal outcome, not an error; the
    /// passenger keeps waiting.
    pub fn board(
        &mut self,
        id: PassengerId,
        calls: &mut CallBoard,
        passengers: &mut PassengerRegistry,
    ) -> bool {
        if self.is_full() {
            return false;
        }
        let passenger = passengers.get_mut(id);
        passenger.elevator = Some(self.id);
        let dest = passenger.destination();

        self.aboard.push(id);
        self.destinations.insert(dest);
        calls.remove(self.current_floor, id);
        self.passengers_served += 1;
        true
    }

    /// Alight every aboard passenger whose destination is the current floor
    /// and withdraw the floor from the destinations set.  Returns the number
    /// alighted (zero for a parking stop nobody wanted).
    pub fn drop_off_arrivals(&mut self, passengers: &mut PassengerRegistry) -> usize {
        let here = self.current_floor;
        let mut dropped = 0;
        self.aboard.retain(|&id| {
            let passenger = passengers.get_mut(id);
            if passenger.destination() == here {
                passenger.current_floor = here;
                passenger.elevator = None;
                dropped += 1;
                false
            } else {
                true
            }
        });
        self.destinations.remove(&here);
        dropped
    }
}
