//! Generational arena of live agents with a deferred-edit barrier.
//!
//! Slots are reused after removal with a bumped generation, so a stale
//! [`AgentId`] never aliases a newer agent. Iteration is always in slot
//! order, which keeps sub-steps deterministic for a given seed.
//!
//! Structural edits requested while a sub-step is sweeping the
//! population are queued with [`queue_spawn`](Population::queue_spawn)
//! and [`queue_remove`](Population::queue_remove) and applied together
//! by [`commit`](Population::commit). Removals are applied before
//! spawns so a replacement can take over the slot it frees.

use crate::agent::Agent;
use flock_core::AgentId;

#[derive(Clone, Debug)]
struct Slot {
    generation: u32,
    agent: Option<Agent>,
}

/// Edits applied at the next [`Population::commit`].
#[derive(Clone, Debug, Default)]
struct PendingEdits {
    removals: Vec<AgentId>,
    spawns: Vec<Agent>,
}

/// What a [`Population::commit`] changed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BarrierOutcome {
    /// Agents removed, in request order. Stale ids are skipped.
    pub removed: Vec<AgentId>,
    /// Ids assigned to queued spawns, in request order.
    pub spawned: Vec<AgentId>,
}

impl BarrierOutcome {
    /// Whether nothing changed.
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.spawned.is_empty()
    }
}

/// The live agent collection.
#[derive(Clone, Debug, Default)]
pub struct Population {
    slots: Vec<Slot>,
    free: Vec<u32>,
    live: usize,
    pending: PendingEdits,
}

impl Population {
    /// Empty population with room for `capacity` agents.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Number of live agents. Queued edits are not counted.
    pub fn len(&self) -> usize {
        self.live
    }

    /// Whether no agents are live.
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Insert an agent immediately.
    ///
    /// # Panics
    ///
    /// Panics if the arena would need more than `u32::MAX` slots.
    pub fn insert(&mut self, agent: Agent) -> AgentId {
        self.live += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.agent = Some(agent);
            return AgentId::new(index, slot.generation);
        }
        let index = u32::try_from(self.slots.len()).expect("agent arena exceeds u32::MAX slots");
        self.slots.push(Slot {
            generation: 0,
            agent: Some(agent),
        });
        AgentId::new(index, 0)
    }

    /// Remove an agent immediately, returning it if `id` was live.
    pub fn remove(&mut self, id: AgentId) -> Option<Agent> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        let agent = slot.agent.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.live -= 1;
        Some(agent)
    }

    /// Whether `id` refers to a live agent.
    pub fn contains(&self, id: AgentId) -> bool {
        self.get(id).is_some()
    }

    /// Look up a live agent.
    pub fn get(&self, id: AgentId) -> Option<&Agent> {
        self.slots
            .get(id.index as usize)
            .filter(|s| s.generation == id.generation)
            .and_then(|s| s.agent.as_ref())
    }

    /// Look up a live agent mutably.
    pub fn get_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|s| s.generation == id.generation)
            .and_then(|s| s.agent.as_mut())
    }

    /// Live agents in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (AgentId, &Agent)> + '_ {
        self.slots.iter().enumerate().filter_map(|(i, s)| {
            s.agent
                .as_ref()
                .map(|a| (AgentId::new(i as u32, s.generation), a))
        })
    }

    /// Live agents in slot order, mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (AgentId, &mut Agent)> + '_ {
        self.slots.iter_mut().enumerate().filter_map(|(i, s)| {
            let generation = s.generation;
            s.agent
                .as_mut()
                .map(|a| (AgentId::new(i as u32, generation), a))
        })
    }

    /// The `n`th live agent in slot order.
    pub fn nth_id(&self, n: usize) -> Option<AgentId> {
        self.iter().nth(n).map(|(id, _)| id)
    }

    /// Queue a removal for the next [`commit`](Self::commit).
    pub fn queue_remove(&mut self, id: AgentId) {
        self.pending.removals.push(id);
    }

    /// Queue a spawn for the next [`commit`](Self::commit).
    pub fn queue_spawn(&mut self, agent: Agent) {
        self.pending.spawns.push(agent);
    }

    /// Number of queued edits.
    pub fn pending_len(&self) -> usize {
        self.pending.removals.len() + self.pending.spawns.len()
    }

    /// Apply queued edits: removals first, then spawns.
    pub fn commit(&mut self) -> BarrierOutcome {
        let PendingEdits { removals, spawns } = std::mem::take(&mut self.pending);
        let removed = removals
            .into_iter()
            .filter(|&id| self.remove(id).is_some())
            .collect();
        let spawned = spawns.into_iter().map(|a| self.insert(a)).collect();
        BarrierOutcome { removed, spawned }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flock_core::{BeaconId, FlockParams, Hsl};
    use glam::DVec2;

    fn agent(x: f64) -> Agent {
        let tint = Hsl {
            hue: 0.0,
            saturation: 50.0,
            lightness: 80.0,
        };
        Agent::new(
            DVec2::new(x, 0.0),
            0.0,
            0.9,
            BeaconId(0),
            tint,
            &FlockParams::default(),
        )
    }

    #[test]
    fn insert_and_get() {
        let mut pop = Population::default();
        let a = pop.insert(agent(1.0));
        let b = pop.insert(agent(2.0));
        assert_eq!(pop.len(), 2);
        assert_eq!(pop.get(a).unwrap().position().x, 1.0);
        assert_eq!(pop.get(b).unwrap().position().x, 2.0);
    }

    #[test]
    fn stale_id_does_not_alias_reused_slot() {
        let mut pop = Population::default();
        let a = pop.insert(agent(1.0));
        assert!(pop.remove(a).is_some());
        let b = pop.insert(agent(2.0));
        assert_eq!(a.index, b.index);
        assert_ne!(a, b);
        assert!(pop.get(a).is_none());
        assert!(pop.remove(a).is_none());
        assert_eq!(pop.get(b).unwrap().position().x, 2.0);
    }

    #[test]
    fn iteration_is_in_slot_order() {
        let mut pop = Population::default();
        let ids: Vec<AgentId> = (0..4).map(|i| pop.insert(agent(i as f64))).collect();
        pop.remove(ids[1]);
        let xs: Vec<f64> = pop.iter().map(|(_, a)| a.position().x).collect();
        assert_eq!(xs, vec![0.0, 2.0, 3.0]);
        assert_eq!(pop.nth_id(1), Some(ids[2]));
        assert_eq!(pop.nth_id(3), None);
    }

    #[test]
    fn queued_edits_wait_for_commit() {
        let mut pop = Population::default();
        let a = pop.insert(agent(1.0));
        pop.queue_remove(a);
        pop.queue_spawn(agent(9.0));
        assert_eq!(pop.len(), 1);
        assert!(pop.contains(a));
        assert_eq!(pop.pending_len(), 2);

        let outcome = pop.commit();
        assert_eq!(outcome.removed, vec![a]);
        assert_eq!(outcome.spawned.len(), 1);
        assert_eq!(pop.len(), 1);
        assert!(!pop.contains(a));
        // The replacement reuses the freed slot.
        assert_eq!(outcome.spawned[0].index, a.index);
        assert_eq!(pop.pending_len(), 0);
        assert!(pop.commit().is_empty());
    }

    #[test]
    fn commit_skips_stale_removals() {
        let mut pop = Population::default();
        let a = pop.insert(agent(1.0));
        pop.queue_remove(a);
        pop.queue_remove(a);
        let outcome = pop.commit();
        assert_eq!(outcome.removed, vec![a]);
        assert!(pop.is_empty());
    }

    #[test]
    fn iter_mut_edits_in_place() {
        let mut pop = Population::default();
        let a = pop.insert(agent(1.0));
        for (_, agent) in pop.iter_mut() {
            agent.size = 2.5;
        }
        assert_eq!(pop.get(a).unwrap().size(), 2.5);
        pop.get_mut(a).unwrap().size = 0.5;
        assert_eq!(pop.get(a).unwrap().size(), 0.5);
    }
}
