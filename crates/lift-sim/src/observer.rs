//! Simulation observer trait for progress reporting and data collection.

use lift_core::Tick;
use lift_dispatch::ElevatorSystem;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  The system reference is read-only —
/// observers summarize state, they never steer it.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, injected: usize, system: &ElevatorSystem) {
///         if tick.0 % self.interval == 0 {
///             println!("{tick}: {injected} new calls, {} waiting", system.calls().len());
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before call injection.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick.
    ///
    /// `injected` is the number of calls submitted this tick.
    fn on_tick_end(&mut self, _tick: Tick, _injected: usize, _system: &ElevatorSystem) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// ticks), with read-only access to the full system so output writers
    /// can record elevator positions without the sim knowing about formats.
    fn on_snapshot(&mut self, _tick: Tick, _system: &ElevatorSystem) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick, _system: &ElevatorSystem) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
