//! The [`Trajectory`] capability and the [`Beacon`] tagged union.

use crate::orbit::OrbitBeacon;
use crate::path::PathBeacon;
use crate::walker::GraphBeacon;
use flock_core::FlockParams;
use glam::DVec2;
use rand::Rng;

/// Something that can report where it is at time `t`.
///
/// `position` is a pure query. `advance` mutates whatever internal
/// progress state a provider keeps; time-driven providers leave the
/// default no-op. The driver calls `position` for every agent during
/// a sub-step and `advance` once per beacon after all agents have moved.
pub trait Trajectory {
    /// Position at simulated time `t` under the given parameters.
    fn position(&self, t: f64, params: &FlockParams) -> DVec2;

    /// Step internal state forward by one tick.
    fn advance<R: Rng + ?Sized>(&mut self, _t: f64, _params: &FlockParams, _rng: &mut R) {}
}

/// A moving target, in one of three flavours.
///
/// # Examples
///
/// ```
/// use flock_beacon::{Beacon, OrbitBeacon, Trajectory};
/// use flock_core::FlockParams;
/// use glam::DVec2;
///
/// let beacon: Beacon = OrbitBeacon::new(DVec2::ZERO, 50.0).unwrap().into();
/// let p = beacon.position(0.0, &FlockParams::default());
/// assert_eq!(p, DVec2::new(50.0, 0.0));
/// ```
#[derive(Clone, Debug)]
pub enum Beacon {
    /// Circles a fixed centre.
    Orbit(OrbitBeacon),
    /// Traverses a closed polyline.
    Path(PathBeacon),
    /// Random walk along graph edges.
    Graph(GraphBeacon),
}

impl Beacon {
    /// Short name of the variant, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Orbit(_) => "orbit",
            Self::Path(_) => "path",
            Self::Graph(_) => "graph",
        }
    }
}

impl Trajectory for Beacon {
    fn position(&self, t: f64, params: &FlockParams) -> DVec2 {
        match self {
            Self::Orbit(b) => b.position(t, params),
            Self::Path(b) => b.position(t, params),
            Self::Graph(b) => b.position(t, params),
        }
    }

    fn advance<R: Rng + ?Sized>(&mut self, t: f64, params: &FlockParams, rng: &mut R) {
        match self {
            Self::Orbit(b) => b.advance(t, params, rng),
            Self::Path(b) => b.advance(t, params, rng),
            Self::Graph(b) => b.advance(t, params, rng),
        }
    }
}

impl From<OrbitBeacon> for Beacon {
    fn from(b: OrbitBeacon) -> Self {
        Self::Orbit(b)
    }
}

impl From<PathBeacon> for Beacon {
    fn from(b: PathBeacon) -> Self {
        Self::Path(b)
    }
}

impl From<GraphBeacon> for Beacon {
    fn from(b: GraphBeacon) -> Self {
        Self::Graph(b)
    }
}
