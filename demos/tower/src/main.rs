//! tower — a full working day in a 60-floor office tower.
//!
//! Generates a random morning-heavy call schedule, runs the elevator bank
//! for one simulated hour (1 tick = 1 second), and writes tick summaries,
//! car snapshots, and final statistics to `output/tower/` as CSV.
//!
//! Set `RUST_LOG=debug` to see the traffic generator's stream split.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use lift_core::{BuildingConfig, SimConfig};
use lift_dispatch::ElevatorSystem;
use lift_output::{CsvWriter, OutputWriter, SimOutputObserver};
use lift_sim::{SimBuilder, SimObserver};
use lift_traffic::{generate, TrafficConfig};

// ── Constants ─────────────────────────────────────────────────────────────────

const NUM_FLOORS:            u16   = 60;
const NUM_ELEVATORS:         u16   = 12;
const SEED:                  u64   = 42;
const TOTAL_TICKS:           u64   = 3_600; // 1 tick = 1 second → one hour
const TOTAL_CALLS:           usize = 3_600;
const OUTPUT_INTERVAL_TICKS: u64   = 60;    // snapshot each car once a minute

// ── Observer wrapper to count rows ───────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:         SimOutputObserver<W>,
    snapshot_rows: usize,
    summary_rows:  usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, snapshot_rows: 0, summary_rows: 0 }
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<W> {
    fn on_tick_end(&mut self, tick: lift_core::Tick, injected: usize, system: &ElevatorSystem) {
        self.summary_rows += 1;
        self.inner.on_tick_end(tick, injected, system);
    }

    fn on_snapshot(&mut self, tick: lift_core::Tick, system: &ElevatorSystem) {
        self.snapshot_rows += system.elevators().len();
        self.inner.on_snapshot(tick, system);
    }

    fn on_sim_end(&mut self, final_tick: lift_core::Tick, system: &ElevatorSystem) {
        self.inner.on_sim_end(final_tick, system);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    println!("=== tower — rust_lift elevator bank ===");
    println!("Floors: {NUM_FLOORS}  |  Cars: {NUM_ELEVATORS}  |  Seed: {SEED}");
    println!();

    // 1. Building and run configuration.
    let config = SimConfig {
        building: BuildingConfig {
            num_floors:    NUM_FLOORS,
            num_elevators: NUM_ELEVATORS,
            ..Default::default()
        },
        total_ticks:           TOTAL_TICKS,
        seed:                  SEED,
        output_interval_ticks: OUTPUT_INTERVAL_TICKS,
    };
    println!(
        "Sim: {} ticks, output every {} ticks, car capacity {}",
        config.total_ticks, OUTPUT_INTERVAL_TICKS, config.building.capacity
    );

    // 2. Generate the call schedule.
    let traffic = TrafficConfig {
        duration_ticks: TOTAL_TICKS,
        total_calls:    TOTAL_CALLS,
        seed:           SEED,
    };
    let schedule = generate(&config.building, &traffic)?;
    println!(
        "Traffic: {} calls → {} passengers over {} distinct ticks",
        TOTAL_CALLS,
        schedule.len(),
        schedule.tick_count()
    );
    println!();

    // 3. Build sim.
    let mut sim = SimBuilder::new(config).schedule(schedule).build()?;

    // 4. Set up output.
    std::fs::create_dir_all("output/tower")?;
    let writer = CsvWriter::new(Path::new("output/tower"))?;
    let inner_obs = SimOutputObserver::new(writer);
    let mut obs = CountingObserver::new(inner_obs);

    // 5. Run.
    let t0 = Instant::now();
    sim.run(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 6. Summary.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  tick_summaries.csv     : {} rows", obs.summary_rows);
    println!("  elevator_snapshots.csv : {} rows", obs.snapshot_rows);
    println!();

    let tally = sim.system.passengers().phase_tally();
    println!(
        "Passengers: {} total — {} arrived, {} riding, {} still waiting",
        sim.system.passengers().len(),
        tally.arrived,
        tally.riding,
        tally.waiting
    );
    println!();

    // 7. Per-car table.
    let stats = sim.system.stats();
    println!("{:<6} {:<8} {:<8} {:<8}", "Car", "Floor", "Served", "Stops");
    println!("{}", "-".repeat(32));
    for (car, s) in sim.system.elevators().iter().zip(&stats.elevators) {
        println!(
            "{:<6} {:<8} {:<8} {:<8}",
            car.id.0, car.current_floor.0, s.passengers_served, s.stops_made,
        );
    }
    println!();

    // 8. Whole-run statistics as JSON (easy to diff between runs).
    println!("{}", serde_json::to_string_pretty(&stats)?);

    Ok(())
}
