//! Random remove-and-respawn of one agent per sub-step.

use crate::population::Population;
use flock_core::{AgentId, BoundaryEdge, Bounds};
use glam::DVec2;
use rand::Rng;

/// A churn event drawn for the current sub-step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChurnPlan {
    /// Agent to remove at the barrier.
    pub victim: AgentId,
    /// Edge the replacement enters from.
    pub edge: BoundaryEdge,
    /// Where the replacement spawns.
    pub entry: DVec2,
}

/// Roll for churn.
///
/// With probability `probability`, picks one live agent uniformly and
/// an entry point uniformly on one of the four boundary edges. Returns
/// `None` on a miss or when the population is empty. The roll is drawn
/// even when the population is empty, so the random stream does not
/// depend on population size.
pub fn plan<R: Rng + ?Sized>(
    population: &Population,
    probability: f64,
    bounds: &Bounds,
    rng: &mut R,
) -> Option<ChurnPlan> {
    if rng.gen::<f64>() >= probability || population.is_empty() {
        return None;
    }
    let victim = population.nth_id(rng.gen_range(0..population.len()))?;
    let edge = BoundaryEdge::random(rng);
    let entry = bounds.sample_edge(edge, rng);
    Some(ChurnPlan {
        victim,
        edge,
        entry,
    })
}
