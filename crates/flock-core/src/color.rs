//! Display tints for agents and beacons.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Golden ratio, used to spread beacon hues around the colour wheel.
const PHI: f64 = 1.618_033_988_749_895;

/// A colour in HSL space: hue in degrees, saturation and lightness in percent.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in degrees, `[0, 360)`.
    pub hue: f64,
    /// Saturation in percent.
    pub saturation: f64,
    /// Lightness in percent.
    pub lightness: f64,
}

impl Hsl {
    /// Hue assigned to the beacon at position `index`.
    ///
    /// Successive beacons step by φ radians, expressed in degrees.
    pub fn beacon_hue(index: usize) -> f64 {
        (index as f64 * PHI).to_degrees().rem_euclid(360.0)
    }

    /// Draw an agent tint around the given beacon hue.
    ///
    /// Saturation is uniform in `[30, 80)` and lightness in `[60, 95)`.
    pub fn agent_tint<R: Rng + ?Sized>(hue: f64, rng: &mut R) -> Self {
        Self {
            hue,
            saturation: rng.gen_range(30.0..80.0),
            lightness: rng.gen_range(60.0..95.0),
        }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({:.5},{:.5}%,{:.5}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}
