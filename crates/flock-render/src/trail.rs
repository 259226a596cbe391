//! Bounded per-agent position history.

use std::collections::{HashSet, VecDeque};

use flock_core::AgentId;
use flock_engine::Snapshot;
use glam::DVec2;
use indexmap::IndexMap;

/// Recent positions of every live agent.
///
/// Each [`record`](TrailBook::record) appends the snapshot's positions,
/// trims every trail to the snapshot's `TRAIL_LENGTH`, and drops trails
/// of agents that are no longer live. Trails are kept in the order
/// agents were first seen, so exports are stable across runs.
#[derive(Clone, Debug, Default)]
pub struct TrailBook {
    trails: IndexMap<AgentId, VecDeque<DVec2>>,
}

impl TrailBook {
    /// Empty trail book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one frame.
    pub fn record(&mut self, snapshot: &Snapshot) {
        let max_len = snapshot.params.trail_len();
        let live: HashSet<AgentId> = snapshot.agents.iter().map(|a| a.id).collect();
        self.trails.retain(|id, _| live.contains(id));
        for agent in &snapshot.agents {
            let trail = self.trails.entry(agent.id).or_default();
            trail.push_back(agent.position);
            while trail.len() > max_len {
                trail.pop_front();
            }
        }
    }

    /// Trail of one agent, oldest point first.
    pub fn get(&self, id: AgentId) -> Option<&VecDeque<DVec2>> {
        self.trails.get(&id)
    }

    /// Every trail, in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (AgentId, &VecDeque<DVec2>)> + '_ {
        self.trails.iter().map(|(&id, t)| (id, t))
    }

    /// Number of agents with a trail.
    pub fn len(&self) -> usize {
        self.trails.len()
    }

    /// Whether no trails are held.
    pub fn is_empty(&self) -> bool {
        self.trails.is_empty()
    }

    /// Forget every trail.
    pub fn clear(&mut self) {
        self.trails.clear();
    }
}
