//! World configuration, validation, and error types.
//!
//! [`WorldConfig`] is the builder input for [`FlockWorld`](crate::FlockWorld).
//! [`validate()`](WorldConfig::validate) checks structural invariants
//! once at construction; the per-tick parameter snapshot can later be
//! replaced through
//! [`set_configuration`](crate::FlockWorld::set_configuration).

use std::error::Error;
use std::fmt;

use flock_beacon::{presets, Beacon};
use flock_core::{Bounds, FlockParams, ParamError};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::steering::ForceAccumulation;

/// Reference population size.
pub const DEFAULT_AGENT_COUNT: usize = 50;

/// Reference number of sub-steps per tick.
pub const DEFAULT_SUB_STEPS: u32 = 2;

/// Reference size smoothing constant.
pub const DEFAULT_SHRINK: f64 = 0.01;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`WorldConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The beacon set is empty; agents would have nothing to follow.
    NoBeacons,
    /// More beacons than a [`BeaconId`](flock_core::BeaconId) can address.
    BeaconCountOverflow {
        /// The configured beacon count.
        count: usize,
    },
    /// `sub_steps` is zero.
    ZeroSubSteps,
    /// Bounds are non-finite or have no area.
    InvalidBounds {
        /// The rejected bounds.
        bounds: Bounds,
    },
    /// `shrink` is outside `(0, 1]`.
    InvalidShrink {
        /// The rejected value.
        value: f64,
    },
    /// An initial parameter is outside its contract range.
    Param(ParamError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoBeacons => write!(f, "at least one beacon is required"),
            Self::BeaconCountOverflow { count } => {
                write!(f, "beacon count {count} exceeds u32::MAX")
            }
            Self::ZeroSubSteps => write!(f, "sub_steps must be at least 1"),
            Self::InvalidBounds { bounds } => write!(
                f,
                "bounds must be finite with positive area, got {}..{}",
                bounds.min, bounds.max
            ),
            Self::InvalidShrink { value } => {
                write!(f, "shrink must be in (0, 1], got {value}")
            }
            Self::Param(e) => write!(f, "parameter: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Param(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParamError> for ConfigError {
    fn from(e: ParamError) -> Self {
        Self::Param(e)
    }
}

// ── WorldConfig ────────────────────────────────────────────────────

/// Complete configuration for constructing a [`FlockWorld`](crate::FlockWorld).
#[derive(Clone, Debug)]
pub struct WorldConfig {
    /// Region agents are scattered in and re-enter from.
    pub bounds: Bounds,
    /// Number of agents spawned at construction. Churn keeps it constant.
    pub agent_count: usize,
    /// Sub-steps run per [`tick()`](crate::FlockWorld::tick). Default: 2.
    pub sub_steps: u32,
    /// Size smoothing constant, in `(0, 1]`. Default: 0.01.
    pub shrink: f64,
    /// Seed for the world's random stream.
    pub seed: u64,
    /// Initial parameter snapshot.
    pub params: FlockParams,
    /// Beacons, addressed by position. Fixed for the world's lifetime.
    pub beacons: Vec<Beacon>,
    /// How neighbour contributions are summed.
    pub accumulation: ForceAccumulation,
}

impl WorldConfig {
    /// The reference setup: 50 agents on the default sheet following ten
    /// Herschel-graph walkers, with the beacons placed from `seed`.
    pub fn reference(seed: u64) -> Self {
        // Stream 1 keeps beacon placement independent of the world's
        // own stream 0 under the same seed.
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        rng.set_stream(1);
        Self::with_beacons(seed, presets::default_beacons(&mut rng))
    }

    /// Reference settings with a custom beacon set.
    pub fn with_beacons(seed: u64, beacons: Vec<Beacon>) -> Self {
        Self {
            bounds: Bounds::default(),
            agent_count: DEFAULT_AGENT_COUNT,
            sub_steps: DEFAULT_SUB_STEPS,
            shrink: DEFAULT_SHRINK,
            seed,
            params: FlockParams::default(),
            beacons,
            accumulation: ForceAccumulation::default(),
        }
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Agents need something to follow.
        if self.beacons.is_empty() {
            return Err(ConfigError::NoBeacons);
        }
        // 1a. Beacon ids are u32.
        if u32::try_from(self.beacons.len()).is_err() {
            return Err(ConfigError::BeaconCountOverflow {
                count: self.beacons.len(),
            });
        }
        // 2. A tick must do something.
        if self.sub_steps == 0 {
            return Err(ConfigError::ZeroSubSteps);
        }
        // 3. Bounds are sampled from, so they need area.
        if !self.bounds.is_valid() {
            return Err(ConfigError::InvalidBounds {
                bounds: self.bounds,
            });
        }
        // 4. Shrink of 0 freezes size; above 1 overshoots.
        if !(self.shrink > 0.0 && self.shrink <= 1.0) {
            return Err(ConfigError::InvalidShrink { value: self.shrink });
        }
        // 5. Parameters within their contract ranges.
        self.params.validate()?;
        Ok(())
    }
}
