//! The agent steering model.
//!
//! One call to [`Steering::steer`] senses neighbours inside the view
//! cone, combines the beacon pull with cohesion, separation and
//! alignment, turns the agent toward the result at the configured rate,
//! and moves it one step.
//!
//! Neighbours are read from a [`Sighting`] frame captured before any
//! agent in the sub-step moved, so the outcome does not depend on the
//! order agents are visited in.

use crate::agent::Agent;
use flock_core::{angle_diff, wrap_angle, FlockParams};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// How neighbour contributions are folded into the steering vector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ForceAccumulation {
    /// Each term is a plain sum over visible neighbours, weighted once.
    #[default]
    Independent,
    /// Legacy behaviour: after each neighbour, the running partial sums
    /// are weighted and added to the steering vector again. Order
    /// dependent and amplifies with neighbour count.
    Compounding,
}

/// What one agent looks like to the others during a sub-step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sighting {
    /// Position at the start of the sub-step.
    pub position: DVec2,
    /// Velocity at the start of the sub-step.
    pub velocity: DVec2,
}

impl Sighting {
    /// Capture an agent's current kinematic state.
    pub fn of(agent: &Agent) -> Self {
        Self {
            position: agent.position,
            velocity: agent.velocity,
        }
    }
}

/// Result of one steering update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SteerOutcome {
    /// Combined steering vector the agent turned toward.
    pub steering: DVec2,
    /// Number of neighbours inside the view cone.
    pub neighbours: usize,
}

/// Per-sub-step steering context.
#[derive(Clone, Copy, Debug)]
pub struct Steering<'a> {
    params: &'a FlockParams,
    shrink: f64,
    mode: ForceAccumulation,
}

impl<'a> Steering<'a> {
    /// Bind the parameter snapshot and size smoothing constant.
    pub fn new(params: &'a FlockParams, shrink: f64, mode: ForceAccumulation) -> Self {
        Self {
            params,
            shrink,
            mode,
        }
    }

    /// Whether `agent` can see something at relative offset `rel`.
    ///
    /// Returns the squared distance when it can.
    fn sense(&self, agent: &Agent, rel: DVec2) -> Option<f64> {
        let d2 = rel.length_squared();
        if d2 >= self.params.look_radius * self.params.look_radius {
            return None;
        }
        let bearing = rel.y.atan2(rel.x);
        if angle_diff(agent.heading, bearing).abs() >= self.params.view_angle {
            return None;
        }
        Some(d2)
    }

    /// Update `agent` in place for one sub-step.
    ///
    /// `frame` holds every live agent, including this one at index
    /// `own`, which is skipped. Its length is the population size used
    /// to damp the flocking terms, so it must not be empty. `target` is
    /// the agent's beacon position at the current time.
    pub fn steer(
        &self,
        agent: &mut Agent,
        own: usize,
        frame: &[Sighting],
        target: DVec2,
    ) -> SteerOutcome {
        debug_assert!(!frame.is_empty(), "steering needs a non-empty frame");
        let p = self.params;
        let n = frame.len() as f64;
        let close_w = p.close_strength / n;
        let avoid_w = p.avoid_strength / n;
        let align_w = p.steer_strength / n;
        let avoid_r2 = p.avoid_radius * p.avoid_radius;

        let mut steering = (target - agent.position) * p.beacon_strength;
        let mut cohesion = DVec2::ZERO;
        let mut avoidance = DVec2::ZERO;
        let mut alignment = DVec2::ZERO;
        let mut neighbours = 0usize;

        for (i, other) in frame.iter().enumerate() {
            if i == own {
                continue;
            }
            let rel = other.position - agent.position;
            let Some(d2) = self.sense(agent, rel) else {
                continue;
            };
            neighbours += 1;
            cohesion += rel;
            if self.mode == ForceAccumulation::Compounding {
                steering += cohesion * close_w;
            }
            if d2 < avoid_r2 {
                avoidance -= rel * (1.0 - d2 / avoid_r2);
                if self.mode == ForceAccumulation::Compounding {
                    steering += avoidance * avoid_w;
                }
            }
            alignment += other.velocity;
            if self.mode == ForceAccumulation::Compounding {
                steering += alignment * align_w;
            }
        }

        if self.mode == ForceAccumulation::Independent {
            steering += cohesion * close_w + avoidance * avoid_w + alignment * align_w;
        }

        let desired = steering.y.atan2(steering.x);
        agent.heading =
            wrap_angle(agent.heading + angle_diff(agent.heading, desired) * p.turn_speed);
        agent.velocity = DVec2::from_angle(agent.heading) * agent.speed_factor * p.max_speed;
        agent.position += agent.velocity;

        let target_size = 3.0 / ((neighbours as f64).sqrt() + 1.0);
        agent.size = agent.size * (1.0 - self.shrink) + target_size * self.shrink;

        SteerOutcome {
            steering,
            neighbours,
        }
    }
}
