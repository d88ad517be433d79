//! Tick observer trait for monitoring the solve pipeline.

/// Trait for observing the phases of a rig tick.
///
/// Implement this to monitor the pipeline (e.g., for debugging,
/// visualization, or performance profiling). All methods have default
/// no-op implementations.
pub trait TickObserver {
    /// Called after the raw target has been low-pass filtered.
    fn on_filter(&mut self) {}

    /// Called after the chain has completed its solver pass.
    fn on_solve(&mut self) {}

    /// Called when a tick is fully complete.
    fn on_tick_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpTickObserver;

impl TickObserver for NoOpTickObserver {}
