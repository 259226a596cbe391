//! Strongly-typed identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of an agent slot in the population arena.
///
/// `index` names the slot and `generation` counts how many times that
/// slot has been reused. A removed agent's ID never compares equal to
/// the ID of whatever agent later occupies the same slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AgentId {
    /// Slot index within the arena.
    pub index: u32,
    /// Reuse counter for the slot.
    pub generation: u32,
}

impl AgentId {
    /// Build an ID from its raw parts.
    pub fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}v{}", self.index, self.generation)
    }
}

/// Identifies a beacon within a world.
///
/// Beacons are created once at startup and never destroyed, so
/// `BeaconId(n)` always refers to the n-th configured beacon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BeaconId(pub u32);

impl BeaconId {
    /// The beacon's position in the world's beacon list.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for BeaconId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for BeaconId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Monotonically increasing simulation clock.
///
/// Incremented once per sub-step; each increment is one unit of
/// simulated time.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct TickId(pub u64);

impl TickId {
    /// The tick as a simulated time value, as fed to trajectories.
    pub fn as_time(self) -> f64 {
        self.0 as f64
    }

    /// The following tick.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for TickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TickId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agent_ids_differ_across_generations() {
        let a = AgentId::new(3, 0);
        let b = AgentId::new(3, 1);
        assert_ne!(a, b);
        assert_eq!(a.to_string(), "3v0");
    }

    #[test]
    fn tick_advances_and_converts_to_time() {
        let t = TickId(41).next();
        assert_eq!(t, TickId(42));
        assert_eq!(t.as_time(), 42.0);
    }
}
