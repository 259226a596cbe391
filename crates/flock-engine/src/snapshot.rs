//! Owned, read-only views of world state for renderers and exporters.

use crate::agent::Agent;
use flock_core::{AgentId, BeaconId, FlockParams, Hsl, TickId};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// One agent as seen by a renderer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentView {
    /// Stable identity, for keying per-agent render state such as trails.
    pub id: AgentId,
    /// Current position.
    pub position: DVec2,
    /// Heading in radians, in `(-π, π]`.
    pub heading: f64,
    /// Smoothed display size.
    pub size: f64,
    /// Beacon followed.
    pub beacon: BeaconId,
    /// Display tint.
    pub tint: Hsl,
}

impl AgentView {
    pub(crate) fn new(id: AgentId, agent: &Agent) -> Self {
        Self {
            id,
            position: agent.position,
            heading: agent.heading,
            size: agent.size,
            beacon: agent.beacon,
            tint: agent.tint,
        }
    }
}

/// One beacon as seen by a renderer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BeaconView {
    /// Index into the beacon set.
    pub id: BeaconId,
    /// Position at the snapshot's time.
    pub position: DVec2,
    /// Hue in degrees shared by the beacon's agents.
    pub hue: f64,
}

/// Everything a frame needs to draw.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Driver invocations completed.
    pub ticks: u64,
    /// Simulated time, counted in sub-steps.
    pub time: TickId,
    /// Parameters in effect for the last tick.
    pub params: FlockParams,
    /// Live agents in slot order.
    pub agents: Vec<AgentView>,
    /// Beacons in id order.
    pub beacons: Vec<BeaconView>,
}

impl Snapshot {
    /// Look up an agent by id.
    pub fn agent(&self, id: AgentId) -> Option<&AgentView> {
        self.agents.iter().find(|a| a.id == id)
    }

    /// Look up a beacon by id.
    pub fn beacon(&self, id: BeaconId) -> Option<&BeaconView> {
        self.beacons.get(id.index())
    }
}
