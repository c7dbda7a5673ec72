//! `SimBuilder` — validating constructor for [`Sim`].
//!
//! The dispatch core deliberately performs no input validation (every floor
//! it sees is assumed in range).  This builder is the boundary that upholds
//! that assumption: it refuses configurations and schedules the core's
//! preconditions don't cover.

use lift_core::SimConfig;
use lift_dispatch::ElevatorSystem;
use lift_traffic::CallSchedule;

use crate::{Sim, SimError, SimResult};

/// Builder for a [`Sim`].
///
/// ```rust,ignore
/// let sim = SimBuilder::new(config).schedule(schedule).build()?;
/// ```
pub struct SimBuilder {
    config: SimConfig,
    schedule: CallSchedule,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            schedule: CallSchedule::new(),
        }
    }

    /// Attach the call schedule to drive during the run.  Defaults to empty
    /// (cars only park).
    pub fn schedule(mut self, schedule: CallSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Validate and construct the [`Sim`].
    ///
    /// # Errors
    ///
    /// - `SimError::Config` for a building with fewer than two floors or a
    ///   zero passenger capacity;
    /// - `SimError::CallOutOfRange` / `SimError::SameFloorCall` for any
    ///   scheduled call the core's preconditions exclude.
    pub fn build(self) -> SimResult<Sim> {
        let building = &self.config.building;

        if building.num_floors < 2 {
            return Err(SimError::Config(format!(
                "a building needs at least 2 floors, got {}",
                building.num_floors
            )));
        }
        if building.capacity == 0 {
            return Err(SimError::Config("elevator capacity must be at least 1".into()));
        }

        // Screen every scheduled call once, up front, so injection during
        // the run can trust the schedule unconditionally.
        for (tick, calls) in self.schedule.iter() {
            for call in calls {
                for floor in [call.start, call.destination] {
                    if !building.contains(floor) {
                        return Err(SimError::CallOutOfRange {
                            tick,
                            floor,
                            top: building.top_floor(),
                        });
                    }
                }
                if call.start == call.destination {
                    return Err(SimError::SameFloorCall { tick, floor: call.start });
                }
            }
        }

        Ok(Sim {
            system: ElevatorSystem::new(*building),
            config: self.config,
            schedule: self.schedule,
        })
    }
}
