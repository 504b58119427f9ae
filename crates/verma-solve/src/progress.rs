//! Progress reporting hooks.

/// Receives solver progress events.
///
/// Before solving starts the solver reports how many non-trivial edge
/// maps it expects to compute, then ticks once per solved map.
/// Implementations can drive a progress bar or collect timings.
pub trait ProgressSink {
    /// Called once before solving starts with the expected tick count.
    fn reset(&mut self, total: usize);

    /// Called after each solved edge map.
    fn tick(&mut self);
}

/// A sink that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn reset(&mut self, _total: usize) {}

    fn tick(&mut self) {}
}
