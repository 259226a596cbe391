//! Circular orbit around a fixed centre.

use crate::beacon::Trajectory;
use crate::error::BeaconError;
use flock_core::FlockParams;
use glam::DVec2;

/// Beacon circling `center` at distance `radius`.
///
/// Angular speed is `MAX_SPEED / radius`, so the beacon's linear speed
/// matches the agents' cruising speed regardless of orbit size.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitBeacon {
    center: DVec2,
    radius: f64,
}

impl OrbitBeacon {
    /// Create an orbit.
    ///
    /// Returns `Err(BeaconError::InvalidRadius)` unless `radius` is
    /// finite and positive, and `Err(BeaconError::NonFiniteVertex)` for
    /// a non-finite centre.
    pub fn new(center: DVec2, radius: f64) -> Result<Self, BeaconError> {
        if !center.is_finite() {
            return Err(BeaconError::NonFiniteVertex { vertex: 0 });
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(BeaconError::InvalidRadius { radius });
        }
        Ok(Self { center, radius })
    }

    /// Orbit centre.
    pub fn center(&self) -> DVec2 {
        self.center
    }

    /// Orbit radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Trajectory for OrbitBeacon {
    fn position(&self, t: f64, params: &FlockParams) -> DVec2 {
        let omega = params.max_speed / self.radius;
        let (sin, cos) = (t * omega).sin_cos();
        self.center + self.radius * DVec2::new(cos, sin)
    }
}
