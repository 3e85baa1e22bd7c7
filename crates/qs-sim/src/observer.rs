//! Simulation observer trait for tracing and data collection.

use qs_agent::Agent;
use qs_core::Tick;

/// Callbacks invoked by [`Simulator::simulate_with`][crate::Simulator::simulate_with]
/// at key points in the run loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: queue length printer
///
/// ```rust,ignore
/// struct QueuePrinter;
///
/// impl SimObserver for QueuePrinter {
///     fn on_step(&mut self, now: Tick, _delta: u64, queue_len: usize, _busy: usize) {
///         println!("{now}: {queue_len} waiting");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called after an arriving agent has been queued or declined.
    fn on_arrival(&mut self, _now: Tick, _agent: &Agent) {}

    /// Called at the end of every step, after handlers have pulled from the
    /// queue and the watermark has been updated.
    ///
    /// `delta` is the size of the jump that led to `now`; `busy` is the number
    /// of handlers owning an agent.
    fn on_step(&mut self, _now: Tick, _delta: u64, _queue_len: usize, _busy: usize) {}

    /// Called once after the loop ends.  `end` is the clock's final position,
    /// which is at or past the run duration.
    fn on_sim_end(&mut self, _end: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
