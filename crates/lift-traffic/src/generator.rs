//! Random traffic model.
//!
//! # Model
//!
//! Total call volume is split between two streams:
//!
//! - **Lobby stream**: a uniformly random share (up to half of all calls)
//!   originates at floor 1 at uniformly random ticks, with party sizes
//!   uniform in `1..=5` and destinations uniform over `2..num_floors`.
//! - **Upper-floor stream**: the remainder is spread across floors
//!   `2..num_floors` at uniform per-floor intervals, with party sizes drawn
//!   from LogNormal(0.7, 0.6), rounded and clamped to `1..=5`.
//!
//! Every random draw comes from a [`SimRng`] stream derived from the
//! configured seed, so a run is reproducible exactly.  Destinations are
//! resampled until they differ from the start floor: same-floor calls never
//! leave this boundary.

use lift_core::{BuildingConfig, Floor, SimRng, Tick};
use rand_distr::{Distribution, LogNormal};

use crate::{CallRequest, CallSchedule, TrafficError, TrafficResult};

/// Party sizes are clamped to this range, callers per call.
const MIN_PARTY: u8 = 1;
const MAX_PARTY: u8 = 5;

/// LogNormal parameters for upper-floor party sizes.
const PARTY_LN_MEAN: f64 = 0.7;
const PARTY_LN_SIGMA: f64 = 0.6;

/// Traffic-model knobs for one run.
#[derive(Clone, Debug)]
pub struct TrafficConfig {
    /// Calls are scheduled in `[0, duration_ticks)`.
    pub duration_ticks: u64,
    /// Total number of calls across both streams (each call brings a party
    /// of 1–5 passengers).
    pub total_calls: usize,
    /// Master seed; the same seed always yields the same schedule.
    pub seed: u64,
}

/// Build a full random call schedule for `building`.
///
/// # Errors
///
/// `TrafficError::Config` if the building has fewer than three floors — the
/// model needs at least one floor strictly between lobby and top.
pub fn generate(
    building: &BuildingConfig,
    traffic: &TrafficConfig,
) -> TrafficResult<CallSchedule> {
    if building.num_floors < 3 {
        return Err(TrafficError::Config(format!(
            "traffic model needs at least 3 floors, got {}",
            building.num_floors
        )));
    }
    if traffic.total_calls == 0 || traffic.duration_ticks == 0 {
        return Ok(CallSchedule::new());
    }

    let mut root = SimRng::new(traffic.seed);
    let lobby_count = if traffic.total_calls >= 2 {
        root.gen_range(0..traffic.total_calls / 2)
    } else {
        0
    };
    let upper_count = traffic.total_calls - lobby_count;

    let mut lobby_rng = root.child(1);
    let mut schedule = lobby_calls(&mut lobby_rng, building, traffic.duration_ticks, lobby_count);

    let mut sizes_rng = root.child(2);
    let sizes = lognormal_party_sizes(&mut sizes_rng, upper_count)?;

    let mut upper_rng = root.child(3);
    schedule.merge(upper_floor_calls(
        &mut upper_rng,
        building,
        traffic.duration_ticks,
        upper_count,
        sizes,
    ));

    log::debug!(
        "generated {} passengers over {} ticks ({lobby_count} lobby calls, {upper_count} upper-floor calls)",
        schedule.len(),
        traffic.duration_ticks
    );
    Ok(schedule)
}

/// Draw `count` party sizes from LogNormal(0.7, 0.6), rounded to the nearest
/// integer and clamped to `1..=5`.
pub fn lognormal_party_sizes(rng: &mut SimRng, count: usize) -> TrafficResult<Vec<u8>> {
    let dist = LogNormal::new(PARTY_LN_MEAN, PARTY_LN_SIGMA)
        .map_err(|e| TrafficError::Config(format!("lognormal parameters: {e}")))?;
    Ok((0..count)
        .map(|_| {
            let raw: f64 = dist.sample(rng.inner());
            (raw.round() as i64).clamp(MIN_PARTY as i64, MAX_PARTY as i64) as u8
        })
        .collect())
}

/// Up-traffic from the lobby: `count` calls at uniformly random ticks, each
/// bringing a uniform 1–5 party bound for a uniformly random floor in
/// `2..num_floors`.
fn lobby_calls(
    rng: &mut SimRng,
    building: &BuildingConfig,
    duration_ticks: u64,
    count: usize,
) -> CallSchedule {
    let mut schedule = CallSchedule::new();
    for _ in 0..count {
        let tick = Tick(rng.gen_range(0..duration_ticks));
        let party: u8 = rng.gen_range(MIN_PARTY..=MAX_PARTY);
        for _ in 0..party {
            let destination = Floor(rng.gen_range(2..building.num_floors));
            schedule.push(tick, CallRequest { start: Floor::GROUND, destination });
        }
    }
    schedule
}

/// Down- and inter-floor traffic: floors `2..num_floors` each issue calls at
/// a uniform interval with a random phase, consuming pre-drawn party sizes
/// until they run out.
fn upper_floor_calls(
    rng: &mut SimRng,
    building: &BuildingConfig,
    duration_ticks: u64,
    count: usize,
    party_sizes: Vec<u8>,
) -> CallSchedule {
    let mut schedule = CallSchedule::new();
    if building.num_floors < 2 || count == 0 {
        return schedule;
    }

    let calls_per_floor = 1.0 + count as f64 / (building.num_floors - 1) as f64;
    let call_interval = 1 + (duration_ticks as f64 / calls_per_floor) as u64;

    let mut sizes = party_sizes.into_iter();
    for floor in 2..building.num_floors {
        let mut tick = rng.gen_range(0..call_interval);
        while tick < duration_ticks {
            let party = sizes.next().unwrap_or(0);
            for _ in 0..party {
                let destination = sample_destination(rng, building.num_floors, floor);
                schedule.push(
                    Tick(tick),
                    CallRequest { start: Floor(floor), destination },
                );
            }
            tick += call_interval;
        }
    }
    schedule
}

/// Uniform destination in `1..num_floors`, resampled until it differs from
/// `start`.  Terminates because the range holds at least two floors.
fn sample_destination(rng: &mut SimRng, num_floors: u16, start: u16) -> Floor {
    loop {
        let dest = rng.gen_range(1..num_floors);
        if dest != start {
            return Floor(dest);
        }
    }
}
