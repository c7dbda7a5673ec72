//! Plain data row types written by output backends.

/// Summary statistics for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:           u64,
    /// Calls injected into the system during this tick.
    pub calls_injected: u64,
    pub waiting:        u64,
    pub riding:         u64,
    pub arrived:        u64,
}

/// A snapshot of one car's state at a given tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElevatorSnapshotRow {
    pub elevator_id:   u16,
    pub tick:          u64,
    pub floor:         u16,
    /// `1` moving up, `-1` moving down, `0` idle.
    pub direction:     i8,
    pub door_open:     bool,
    pub occupancy:     u64,
    /// Floors the car has committed to visiting.
    pub pending_stops: u64,
}

/// Final per-car counters, written once at the end of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElevatorStatsRow {
    pub elevator_id:        u16,
    pub passengers_served:  u64,
    pub ticks_in_operation: u64,
    pub stops_made:         u64,
}

/// Final per-passenger timing, written once at the end of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassengerTimesRow {
    pub passenger_id:      u32,
    pub start_floor:       u16,
    pub destination_floor: u16,
    pub wait_ticks:        u64,
    pub ride_ticks:        u64,
    pub total_ticks:       u64,
}
