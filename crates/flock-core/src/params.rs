//! Named simulation parameters.
//!
//! [`FlockParams`] is the immutable snapshot of the twelve knobs the
//! steering model, beacons and churn read each tick. The driver captures
//! one snapshot at the start of a tick and passes it down by reference,
//! so a tick never observes a half-applied update.
//!
//! Each [`ParamKey`] carries two ranges:
//!
//! - the **contract range**, which the core assumes and
//!   [`FlockParams::validate`] enforces;
//! - the **control range**, a narrower band that user-facing settings
//!   clamp raw input into before it ever reaches the core.

use crate::error::ParamError;
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};
use std::fmt;
use std::str::FromStr;

// ── ParamRange ──────────────────────────────────────────────────

/// Inclusive numeric range `[min, max]`. `max` may be infinite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParamRange {
    /// Inclusive lower bound.
    pub min: f64,
    /// Inclusive upper bound.
    pub max: f64,
}

impl ParamRange {
    const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    const fn at_least(min: f64) -> Self {
        Self {
            min,
            max: f64::INFINITY,
        }
    }

    /// Whether `value` lies within the range.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp `value` into the range. NaN maps to `min`.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }
}

// ── ParamKey ────────────────────────────────────────────────────

/// One of the named scalar parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParamKey {
    /// Agent cruising speed, in units per tick.
    MaxSpeed,
    /// Beacon travel speed along paths and graph edges.
    BeaconSpeed,
    /// Radius of the view cone.
    LookRadius,
    /// Distance under which neighbours repel.
    AvoidRadius,
    /// Fraction of the heading error corrected per tick.
    TurnSpeed,
    /// Half-angle of the view cone.
    ViewAngle,
    /// Weight of the pull toward visible neighbours.
    CloseStrength,
    /// Weight of the push away from crowding neighbours.
    AvoidStrength,
    /// Weight of velocity matching with visible neighbours.
    SteerStrength,
    /// Weight of the pull toward the assigned beacon.
    BeaconStrength,
    /// Per-sub-step probability that one agent is respawned.
    RepositionProbability,
    /// Number of recent positions a renderer keeps per agent.
    TrailLength,
}

impl ParamKey {
    /// Every key, in canonical order.
    pub const ALL: [ParamKey; 12] = [
        ParamKey::MaxSpeed,
        ParamKey::BeaconSpeed,
        ParamKey::LookRadius,
        ParamKey::AvoidRadius,
        ParamKey::TurnSpeed,
        ParamKey::ViewAngle,
        ParamKey::CloseStrength,
        ParamKey::AvoidStrength,
        ParamKey::SteerStrength,
        ParamKey::BeaconStrength,
        ParamKey::RepositionProbability,
        ParamKey::TrailLength,
    ];

    /// Canonical name, as used in persisted settings.
    pub fn name(self) -> &'static str {
        match self {
            Self::MaxSpeed => "MAX_SPEED",
            Self::BeaconSpeed => "BEACON_SPEED",
            Self::LookRadius => "LOOK_RADIUS",
            Self::AvoidRadius => "AVOID_RADIUS",
            Self::TurnSpeed => "TURN_SPEED",
            Self::ViewAngle => "VIEW_ANGLE",
            Self::CloseStrength => "CLOSE_STRENGTH",
            Self::AvoidStrength => "AVOID_STRENGTH",
            Self::SteerStrength => "STEER_STRENGTH",
            Self::BeaconStrength => "BEACON_STRENGTH",
            Self::RepositionProbability => "REPOSITION_PROBABILITY",
            Self::TrailLength => "TRAIL_LENGTH",
        }
    }

    /// Human-readable label for settings panels.
    pub fn label(self) -> &'static str {
        match self {
            Self::MaxSpeed => "Bird speed",
            Self::BeaconSpeed => "Beacon speed",
            Self::LookRadius => "Look radius",
            Self::AvoidRadius => "Avoid radius",
            Self::TurnSpeed => "Turn speed",
            Self::ViewAngle => "View angle",
            Self::CloseStrength => "Gather strength",
            Self::AvoidStrength => "Avoid strength",
            Self::SteerStrength => "Steer strength",
            Self::BeaconStrength => "Beacon strength",
            Self::RepositionProbability => "Reposition probability",
            Self::TrailLength => "Trail length",
        }
    }

    /// Reference default value.
    pub fn default_value(self) -> f64 {
        match self {
            Self::MaxSpeed => 1.0,
            Self::BeaconSpeed => 1.0,
            Self::LookRadius => 20.0,
            Self::AvoidRadius => 10.0,
            Self::TurnSpeed => 0.1,
            Self::ViewAngle => TAU / 3.0,
            Self::CloseStrength => 0.01,
            Self::AvoidStrength => 0.2,
            Self::SteerStrength => 0.1,
            Self::BeaconStrength => 0.01,
            Self::RepositionProbability => 0.01,
            Self::TrailLength => 500.0,
        }
    }

    /// Range the core requires. Values outside it are a contract violation.
    pub fn contract_range(self) -> ParamRange {
        match self {
            Self::TurnSpeed => ParamRange::new(0.0, PI / 10.0),
            Self::ViewAngle => ParamRange::new(0.0, TAU),
            Self::RepositionProbability => ParamRange::new(0.0, 1.0),
            _ => ParamRange::at_least(0.0),
        }
    }

    /// Range user input is clamped into.
    pub fn control_range(self) -> ParamRange {
        match self {
            Self::MaxSpeed | Self::BeaconSpeed => ParamRange::new(0.0, 2.0),
            Self::LookRadius | Self::AvoidRadius => ParamRange::new(0.0, 100.0),
            Self::TurnSpeed => ParamRange::new(0.0, PI / 10.0),
            Self::ViewAngle => ParamRange::new(0.0, PI),
            Self::RepositionProbability => ParamRange::new(0.0, 0.01),
            _ => ParamRange::at_least(0.0),
        }
    }

    /// Whether the parameter only takes whole-number values.
    pub fn is_integer(self) -> bool {
        matches!(self, Self::TrailLength)
    }

    /// Check `value` against the contract range.
    pub fn check(self, value: f64) -> Result<(), ParamError> {
        if !value.is_finite() {
            return Err(ParamError::NonFinite { key: self, value });
        }
        let range = self.contract_range();
        if !range.contains(value) {
            return Err(ParamError::OutOfRange {
                key: self,
                value,
                min: range.min,
                max: range.max,
            });
        }
        Ok(())
    }
}

impl fmt::Display for ParamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ParamKey {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| ParamError::UnknownKey {
                name: s.to_string(),
            })
    }
}

// ── FlockParams ─────────────────────────────────────────────────

/// Snapshot of every named parameter.
///
/// Plain `Copy` data: the driver clones it at tick start and nothing
/// downstream can observe a later change mid-tick.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlockParams {
    /// See [`ParamKey::MaxSpeed`].
    pub max_speed: f64,
    /// See [`ParamKey::BeaconSpeed`].
    pub beacon_speed: f64,
    /// See [`ParamKey::LookRadius`].
    pub look_radius: f64,
    /// See [`ParamKey::AvoidRadius`].
    pub avoid_radius: f64,
    /// See [`ParamKey::TurnSpeed`].
    pub turn_speed: f64,
    /// See [`ParamKey::ViewAngle`].
    pub view_angle: f64,
    /// See [`ParamKey::CloseStrength`].
    pub close_strength: f64,
    /// See [`ParamKey::AvoidStrength`].
    pub avoid_strength: f64,
    /// See [`ParamKey::SteerStrength`].
    pub steer_strength: f64,
    /// See [`ParamKey::BeaconStrength`].
    pub beacon_strength: f64,
    /// See [`ParamKey::RepositionProbability`].
    pub reposition_probability: f64,
    /// See [`ParamKey::TrailLength`].
    pub trail_length: f64,
}

impl Default for FlockParams {
    fn default() -> Self {
        let mut params = Self {
            max_speed: 0.0,
            beacon_speed: 0.0,
            look_radius: 0.0,
            avoid_radius: 0.0,
            turn_speed: 0.0,
            view_angle: 0.0,
            close_strength: 0.0,
            avoid_strength: 0.0,
            steer_strength: 0.0,
            beacon_strength: 0.0,
            reposition_probability: 0.0,
            trail_length: 0.0,
        };
        for key in ParamKey::ALL {
            params.set(key, key.default_value());
        }
        params
    }
}

impl FlockParams {
    /// Read one parameter by key.
    pub fn get(&self, key: ParamKey) -> f64 {
        match key {
            ParamKey::MaxSpeed => self.max_speed,
            ParamKey::BeaconSpeed => self.beacon_speed,
            ParamKey::LookRadius => self.look_radius,
            ParamKey::AvoidRadius => self.avoid_radius,
            ParamKey::TurnSpeed => self.turn_speed,
            ParamKey::ViewAngle => self.view_angle,
            ParamKey::CloseStrength => self.close_strength,
            ParamKey::AvoidStrength => self.avoid_strength,
            ParamKey::SteerStrength => self.steer_strength,
            ParamKey::BeaconStrength => self.beacon_strength,
            ParamKey::RepositionProbability => self.reposition_probability,
            ParamKey::TrailLength => self.trail_length,
        }
    }

    /// Overwrite one parameter without validation.
    pub fn set(&mut self, key: ParamKey, value: f64) {
        let slot = match key {
            ParamKey::MaxSpeed => &mut self.max_speed,
            ParamKey::BeaconSpeed => &mut self.beacon_speed,
            ParamKey::LookRadius => &mut self.look_radius,
            ParamKey::AvoidRadius => &mut self.avoid_radius,
            ParamKey::TurnSpeed => &mut self.turn_speed,
            ParamKey::ViewAngle => &mut self.view_angle,
            ParamKey::CloseStrength => &mut self.close_strength,
            ParamKey::AvoidStrength => &mut self.avoid_strength,
            ParamKey::SteerStrength => &mut self.steer_strength,
            ParamKey::BeaconStrength => &mut self.beacon_strength,
            ParamKey::RepositionProbability => &mut self.reposition_probability,
            ParamKey::TrailLength => &mut self.trail_length,
        };
        *slot = value;
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, key: ParamKey, value: f64) -> Self {
        self.set(key, value);
        self
    }

    /// Iterate `(key, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (ParamKey, f64)> + '_ {
        ParamKey::ALL.into_iter().map(move |k| (k, self.get(k)))
    }

    /// Check every parameter against its contract range.
    pub fn validate(&self) -> Result<(), ParamError> {
        self.iter().try_for_each(|(k, v)| k.check(v))
    }

    /// Apply a partial update and validate the result.
    ///
    /// Returns the merged snapshot, leaving `self` untouched. On error
    /// no part of the update is applied.
    pub fn merged<I>(&self, updates: I) -> Result<Self, ParamError>
    where
        I: IntoIterator<Item = (ParamKey, f64)>,
    {
        let mut next = *self;
        for (key, value) in updates {
            key.check(value)?;
            next.set(key, value);
        }
        Ok(next)
    }

    /// Trail length as a whole number of points.
    pub fn trail_len(&self) -> usize {
        if self.trail_length.is_finite() && self.trail_length > 0.0 {
            self.trail_length as usize
        } else {
            0
        }
    }
}
