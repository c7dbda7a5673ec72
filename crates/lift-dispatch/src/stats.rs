//! Statistics report types — a pure read-only summarization of core state.

use lift_core::ElevatorId;

use crate::{Elevator, PassengerRegistry};

/// Per-car counters for the reporting collaborator.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElevatorStats {
    pub elevator_id: ElevatorId,
    /// Boardings, not deliveries — a passenger counts as served the moment
    /// it boards.
    pub passengers_served: u64,
    pub ticks_in_operation: u64,
    pub stops_made: u64,
}

/// Whole-run statistics over every passenger ever registered.
///
/// All aggregates are zero when the registry is empty — an empty run is not
/// an error.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SystemStats {
    pub average_wait_ticks: f64,
    pub average_ride_ticks: f64,
    pub average_total_ticks: f64,
    pub max_wait_ticks: u64,
    pub min_wait_ticks: u64,
    pub elevators: Vec<ElevatorStats>,
}

impl SystemStats {
    /// Aggregate over `passengers` and snapshot every car's counters.
    pub fn collect(elevators: &[Elevator], passengers: &PassengerRegistry) -> SystemStats {
        let count = passengers.len();

        let (mut wait_sum, mut ride_sum) = (0u64, 0u64);
        let mut max_wait = 0u64;
        let mut min_wait = u64::MAX;
        for p in passengers.iter() {
            wait_sum += p.wait_ticks;
            ride_sum += p.ride_ticks;
            max_wait = max_wait.max(p.wait_ticks);
            min_wait = min_wait.min(p.wait_ticks);
        }

        let mean = |sum: u64| {
            if count == 0 {
                0.0
            } else {
                sum as f64 / count as f64
            }
        };

        SystemStats {
            average_wait_ticks: mean(wait_sum),
            average_ride_ticks: mean(ride_sum),
            average_total_ticks: mean(wait_sum + ride_sum),
            max_wait_ticks: max_wait,
            min_wait_ticks: if count == 0 { 0 } else { min_wait },
            elevators: elevators
                .iter()
                .map(|e| ElevatorStats {
                    elevator_id: e.id,
                    passengers_served: e.passengers_served,
                    ticks_in_operation: e.ticks_in_operation,
                    stops_made: e.stops_made,
                })
                .collect(),
        }
    }
}
