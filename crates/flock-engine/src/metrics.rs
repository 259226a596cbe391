//! Per-tick performance metrics for the simulation driver.
//!
//! [`StepMetrics`] captures timing and population data for a single
//! [`tick()`](crate::FlockWorld::tick). Phase timings are summed over
//! the tick's sub-steps.

/// Timing and population metrics collected during a single tick.
///
/// All durations are in microseconds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepMetrics {
    /// Wall-clock time for the entire tick.
    pub total_us: u64,
    /// Time spent sensing and steering agents.
    pub steering_us: u64,
    /// Time spent advancing beacons.
    pub beacon_us: u64,
    /// Time spent applying queued population edits.
    pub barrier_us: u64,
    /// Sub-steps run.
    pub sub_steps: u32,
    /// Agents removed by churn.
    pub churned: u32,
    /// Live agents after the tick.
    pub population: usize,
    /// Mean visible-neighbour count over every steering update.
    pub mean_neighbours: f64,
}
