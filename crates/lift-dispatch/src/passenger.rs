//! Passenger lifecycle and the append-only registry arena.

use lift_core::{ElevatorId, Floor, PassengerId};

// ── Passenger ─────────────────────────────────────────────────────────────────

/// One passenger: a moving entity with a location and two accumulating
/// timers.
///
/// At any instant exactly one of three phases holds:
///
/// | Phase       | Condition                                         |
/// |-------------|---------------------------------------------------|
/// | **waiting** | `elevator.is_none()` and not at the destination   |
/// | **riding**  | `elevator.is_some()`                              |
/// | **arrived** | `elevator.is_none()` and at the destination       |
///
/// Arrived is terminal — once reached, further ticks change nothing.
/// Passengers are never destroyed during a run; the registry retains them
/// for final statistics.
///
/// `start` and `destination` are set at construction and treated as
/// immutable.  A call whose destination equals its start floor is a
/// precondition violation the core does not check; the collaborator
/// boundaries reject such calls before they get here.
#[derive(Clone, Debug)]
pub struct Passenger {
    start: Floor,
    destination: Floor,

    /// Where the passenger currently is.  Updated by the carrying car as it
    /// moves, and on alighting.
    pub current_floor: Floor,

    /// The car currently carrying this passenger; `None` while waiting or
    /// after arrival.  A non-owning back-reference — the car's aboard list
    /// is the owning side.
    pub elevator: Option<ElevatorId>,

    /// Ticks spent waiting at the start floor before boarding.
    pub wait_ticks: u64,

    /// Ticks spent inside a car.
    pub ride_ticks: u64,
}

impl Passenger {
    pub fn new(start: Floor, destination: Floor) -> Self {
        Self {
            start,
            destination,
            current_floor: start,
            elevator: None,
            wait_ticks: 0,
            ride_ticks: 0,
        }
    }

    #[inline]
    pub fn start(&self) -> Floor {
        self.start
    }

    #[inline]
    pub fn destination(&self) -> Floor {
        self.destination
    }

    /// Total ticks this passenger has spent in the system (wait + ride).
    #[inline]
    pub fn total_ticks(&self) -> u64 {
        self.wait_ticks + self.ride_ticks
    }

    #[inline]
    pub fn is_riding(&self) -> bool {
        self.elevator.is_some()
    }

    #[inline]
    pub fn is_waiting(&self) -> bool {
        self.elevator.is_none() && self.current_floor != self.destination
    }

    #[inline]
    pub fn has_arrived(&self) -> bool {
        self.elevator.is_none() && self.current_floor == self.destination
    }

    /// Per-tick time accounting.  Runs once per simulation tick, after every
    /// car has acted, so the boarding tick counts toward ride time and the
    /// alighting tick toward neither timer.
    pub fn record_tick(&mut self) {
        if self.is_riding() {
            self.ride_ticks += 1;
        } else if self.current_floor != self.destination {
            self.wait_ticks += 1;
        }
    }
}

// ── PassengerRegistry ─────────────────────────────────────────────────────────

/// Append-only arena of every passenger ever introduced, indexed by
/// [`PassengerId`].
///
/// IDs are handed out by [`push`][Self::push] and stay valid for the life of
/// the registry, so lookups index directly.
#[derive(Debug, Default)]
pub struct PassengerRegistry {
    passengers: Vec<Passenger>,
}

impl PassengerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a passenger, returning its permanent ID.
    pub fn push(&mut self, passenger: Passenger) -> PassengerId {
        let id = PassengerId(self.passengers.len() as u32);
        self.passengers.push(passenger);
        id
    }

    #[inline]
    pub fn get(&self, id: PassengerId) -> &Passenger {
        &self.passengers[id.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, id: PassengerId) -> &mut Passenger {
        &mut self.passengers[id.index()]
    }

    pub fn len(&self) -> usize {
        self.passengers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }

    /// Passengers in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Passenger> {
        self.passengers.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Passenger> {
        self.passengers.iter_mut()
    }

    /// Count passengers in each lifecycle phase.  O(n) scan.
    pub fn phase_tally(&self) -> PhaseTally {
        let mut tally = PhaseTally::default();
        for p in &self.passengers {
            if p.is_riding() {
                tally.riding += 1;
            } else if p.has_arrived() {
                tally.arrived += 1;
            } else {
                tally.waiting += 1;
            }
        }
        tally
    }
}

/// Passenger counts per lifecycle phase at one instant.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PhaseTally {
    pub waiting: u64,
    pub riding: u64,
    pub arrived: u64,
}
