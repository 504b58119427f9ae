//! Solver configuration.

/// Tuning knobs for [`MapSolver`](crate::MapSolver).
#[derive(Clone, Copy, Debug)]
pub struct SolverConfig {
    /// Minimum number of pending systems in a round before the round is
    /// solved on the rayon thread pool instead of sequentially.
    pub parallel_threshold: usize,
    /// Re-check every square after solving completes and fail if one
    /// does not commute.
    pub verify: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 16,
            verify: false,
        }
    }
}
