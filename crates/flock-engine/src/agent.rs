//! Per-agent state.

use flock_core::{wrap_angle, BeaconId, FlockParams, Hsl};
use glam::DVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use std::ops::Range;

/// Range the per-agent speed factor is drawn from.
pub const SPEED_FACTOR_RANGE: Range<f64> = 0.8..1.0;

/// Display size of a freshly spawned agent.
pub const INITIAL_SIZE: f64 = 1.0;

/// One member of the flock.
///
/// Heading is kept in `(-π, π]`. Velocity always points along the
/// heading with magnitude `speed_factor * MAX_SPEED` as of the last
/// update. The beacon is referenced by id; beacons outlive every agent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub(crate) position: DVec2,
    pub(crate) velocity: DVec2,
    pub(crate) heading: f64,
    pub(crate) speed_factor: f64,
    pub(crate) size: f64,
    pub(crate) beacon: BeaconId,
    pub(crate) tint: Hsl,
}

impl Agent {
    /// Build an agent with explicit state.
    ///
    /// `heading` is wrapped into `(-π, π]` and the initial velocity is
    /// derived from it and `params.max_speed`. Size starts at
    /// [`INITIAL_SIZE`].
    pub fn new(
        position: DVec2,
        heading: f64,
        speed_factor: f64,
        beacon: BeaconId,
        tint: Hsl,
        params: &FlockParams,
    ) -> Self {
        let heading = wrap_angle(heading);
        Self {
            position,
            velocity: DVec2::from_angle(heading) * speed_factor * params.max_speed,
            heading,
            speed_factor,
            size: INITIAL_SIZE,
            beacon,
            tint,
        }
    }

    /// Spawn an agent at `position` following `beacon`.
    ///
    /// Draws, in order: a heading uniform in `[0, 2π)`, a speed factor
    /// from [`SPEED_FACTOR_RANGE`], and a tint around `hue`.
    pub fn spawn<R: Rng + ?Sized>(
        position: DVec2,
        beacon: BeaconId,
        hue: f64,
        params: &FlockParams,
        rng: &mut R,
    ) -> Self {
        let heading = rng.gen_range(0.0..TAU);
        let speed_factor = rng.gen_range(SPEED_FACTOR_RANGE);
        let tint = Hsl::agent_tint(hue, rng);
        Self::new(position, heading, speed_factor, beacon, tint, params)
    }

    /// Current position.
    pub fn position(&self) -> DVec2 {
        self.position
    }

    /// Velocity applied in the last update.
    pub fn velocity(&self) -> DVec2 {
        self.velocity
    }

    /// Heading in radians, in `(-π, π]`.
    pub fn heading(&self) -> f64 {
        self.heading
    }

    /// Fixed multiplier on `MAX_SPEED`.
    pub fn speed_factor(&self) -> f64 {
        self.speed_factor
    }

    /// Smoothed display size.
    pub fn size(&self) -> f64 {
        self.size
    }

    /// The beacon this agent follows.
    pub fn beacon(&self) -> BeaconId {
        self.beacon
    }

    /// Display tint.
    pub fn tint(&self) -> Hsl {
        self.tint
    }

    /// Whether position, heading and speed factor are all finite.
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.heading.is_finite() && self.speed_factor.is_finite()
    }
}
