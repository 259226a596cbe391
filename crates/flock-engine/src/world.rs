//! The simulation driver.
//!
//! [`FlockWorld`] owns the population, the beacon set, the parameter
//! snapshot and the random stream. Renderers call
//! [`tick()`](FlockWorld::tick) then [`snapshot()`](FlockWorld::snapshot)
//! once per frame; settings panels call
//! [`set_configuration()`](FlockWorld::set_configuration) whenever the
//! user moves a control.
//!
//! # Ownership model
//!
//! `FlockWorld` is [`Send`] but all mutation goes through `&mut self`,
//! so there is exactly one writer. Snapshots are owned copies and can
//! outlive the next tick.

use std::error::Error;
use std::fmt;
use std::time::Instant;

use flock_beacon::{Beacon, Trajectory};
use flock_core::{AgentId, BeaconId, Bounds, FlockParams, Hsl, ParamError, ParamKey, TickId};
use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::agent::Agent;
use crate::churn;
use crate::config::{ConfigError, WorldConfig};
use crate::metrics::StepMetrics;
use crate::population::Population;
use crate::snapshot::{AgentView, BeaconView, Snapshot};
use crate::steering::{ForceAccumulation, Sighting, Steering};

// Compile-time assertion: FlockWorld is Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<FlockWorld>();
    }
};

// ── SpawnError ─────────────────────────────────────────────────────

/// Errors from inserting an agent into a running world.
#[derive(Clone, Debug, PartialEq)]
pub enum SpawnError {
    /// The agent references a beacon the world does not have.
    UnknownBeacon {
        /// The requested beacon.
        beacon: BeaconId,
        /// Number of beacons in the world.
        count: usize,
    },
    /// Position, heading or speed factor is NaN or infinite.
    NonFinite,
}

impl fmt::Display for SpawnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownBeacon { beacon, count } => {
                write!(f, "beacon {beacon} does not exist (world has {count})")
            }
            Self::NonFinite => write!(f, "agent state must be finite"),
        }
    }
}

impl Error for SpawnError {}

// ── FlockWorld ─────────────────────────────────────────────────────

/// Single-threaded flocking world.
///
/// # Example
///
/// ```
/// use flock_engine::{FlockWorld, WorldConfig};
/// use flock_core::ParamKey;
///
/// let mut world = FlockWorld::new(WorldConfig::reference(42)).unwrap();
/// world.set_configuration([(ParamKey::LookRadius, 30.0)]).unwrap();
/// for _ in 0..10 {
///     world.tick();
/// }
/// let frame = world.snapshot();
/// assert_eq!(frame.agents.len(), 50);
/// assert_eq!(frame.params.look_radius, 30.0);
/// ```
pub struct FlockWorld {
    bounds: Bounds,
    sub_steps: u32,
    shrink: f64,
    seed: u64,
    accumulation: ForceAccumulation,
    params: FlockParams,
    staged: Option<FlockParams>,
    beacons: Vec<Beacon>,
    hues: Vec<f64>,
    population: Population,
    rng: ChaCha8Rng,
    ticks: u64,
    time: TickId,
    frame: Vec<Sighting>,
    targets: Vec<DVec2>,
    last_metrics: StepMetrics,
}

impl FlockWorld {
    /// Validate `config` and scatter its agents uniformly over the bounds.
    pub fn new(config: WorldConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let hues = (0..config.beacons.len()).map(Hsl::beacon_hue).collect();
        let mut world = Self {
            bounds: config.bounds,
            sub_steps: config.sub_steps,
            shrink: config.shrink,
            seed: config.seed,
            accumulation: config.accumulation,
            params: config.params,
            staged: None,
            beacons: config.beacons,
            hues,
            population: Population::with_capacity(config.agent_count),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            ticks: 0,
            time: TickId::default(),
            frame: Vec::with_capacity(config.agent_count),
            targets: Vec::new(),
            last_metrics: StepMetrics::default(),
        };
        for _ in 0..config.agent_count {
            let position = world.bounds.sample(&mut world.rng);
            let agent = draw_agent(position, &world.hues, &world.params, &mut world.rng);
            world.population.insert(agent);
        }
        debug!(
            agents = world.population.len(),
            beacons = world.beacons.len(),
            seed = world.seed,
            "world created"
        );
        Ok(world)
    }

    /// Run one tick of `sub_steps` sub-steps.
    ///
    /// A configuration staged by [`set_configuration`](Self::set_configuration)
    /// takes effect here, before the first sub-step, and stays fixed for
    /// the whole tick.
    pub fn tick(&mut self) -> StepMetrics {
        let started = Instant::now();
        if let Some(params) = self.staged.take() {
            debug!(tick = self.ticks, "staged configuration applied");
            self.params = params;
        }
        let params = self.params;
        let mut metrics = StepMetrics {
            sub_steps: self.sub_steps,
            ..StepMetrics::default()
        };
        let mut steered = 0usize;
        let mut seen = 0usize;
        for _ in 0..self.sub_steps {
            let (agents, neighbours) = self.sub_step(&params, &mut metrics);
            steered += agents;
            seen += neighbours;
        }
        self.ticks += 1;
        metrics.population = self.population.len();
        metrics.mean_neighbours = if steered == 0 {
            0.0
        } else {
            seen as f64 / steered as f64
        };
        metrics.total_us = started.elapsed().as_micros() as u64;
        debug!(
            tick = self.ticks,
            time = %self.time,
            population = metrics.population,
            churned = metrics.churned,
            total_us = metrics.total_us,
            "tick complete"
        );
        self.last_metrics = metrics.clone();
        metrics
    }

    /// One sub-step. Returns agents steered and neighbours seen.
    fn sub_step(&mut self, params: &FlockParams, metrics: &mut StepMetrics) -> (usize, usize) {
        self.time = self.time.next();
        let t = self.time.as_time();

        if let Some(plan) = churn::plan(
            &self.population,
            params.reposition_probability,
            &self.bounds,
            &mut self.rng,
        ) {
            let replacement = draw_agent(plan.entry, &self.hues, params, &mut self.rng);
            self.population.queue_remove(plan.victim);
            self.population.queue_spawn(replacement);
        }

        let phase = Instant::now();
        self.frame.clear();
        self.frame
            .extend(self.population.iter().map(|(_, agent)| Sighting::of(agent)));
        let mut seen = 0usize;
        if !self.frame.is_empty() {
            self.targets.clear();
            self.targets
                .extend(self.beacons.iter().map(|b| b.position(t, params)));
            let steering = Steering::new(params, self.shrink, self.accumulation);
            for (own, (_, agent)) in self.population.iter_mut().enumerate() {
                let target = self.targets[agent.beacon.index()];
                seen += steering.steer(agent, own, &self.frame, target).neighbours;
            }
        }
        metrics.steering_us += phase.elapsed().as_micros() as u64;

        let phase = Instant::now();
        for beacon in &mut self.beacons {
            beacon.advance(t, params, &mut self.rng);
        }
        metrics.beacon_us += phase.elapsed().as_micros() as u64;

        let phase = Instant::now();
        let outcome = self.population.commit();
        for (old, new) in outcome.removed.iter().zip(&outcome.spawned) {
            debug!(time = %self.time, removed = %old, spawned = %new, "agent churned");
        }
        metrics.churned += outcome.removed.len() as u32;
        metrics.barrier_us += phase.elapsed().as_micros() as u64;

        trace!(
            time = %self.time,
            population = self.population.len(),
            neighbours = seen,
            "sub-step complete"
        );
        (self.frame.len(), seen)
    }

    /// Owned view of every agent and beacon at the current time.
    pub fn snapshot(&self) -> Snapshot {
        let t = self.time.as_time();
        Snapshot {
            ticks: self.ticks,
            time: self.time,
            params: self.params,
            agents: self
                .population
                .iter()
                .map(|(id, agent)| AgentView::new(id, agent))
                .collect(),
            beacons: self
                .beacons
                .iter()
                .zip(&self.hues)
                .enumerate()
                .map(|(i, (beacon, &hue))| BeaconView {
                    id: BeaconId(u32::try_from(i).expect("beacon count validated")),
                    position: beacon.position(t, &self.params),
                    hue,
                })
                .collect(),
        }
    }

    /// Merge parameter updates into the configuration for the next tick.
    ///
    /// Updates stack on top of anything already staged. The merged
    /// snapshot is validated here; on error nothing is staged and the
    /// previous staged snapshot, if any, is kept.
    pub fn set_configuration<I>(&mut self, updates: I) -> Result<(), ParamError>
    where
        I: IntoIterator<Item = (ParamKey, f64)>,
    {
        let base = self.staged.unwrap_or(self.params);
        let next = base.merged(updates)?;
        debug!(changed = next != base, "configuration staged");
        self.staged = Some(next);
        Ok(())
    }

    /// Spawn an agent at `position` following a random beacon.
    ///
    /// Takes effect immediately. Random draws come from the world's
    /// stream, so spawns are reproducible under a fixed seed.
    pub fn spawn_agent(&mut self, position: DVec2) -> Result<AgentId, SpawnError> {
        if !position.is_finite() {
            return Err(SpawnError::NonFinite);
        }
        let agent = draw_agent(position, &self.hues, &self.params, &mut self.rng);
        let id = self.population.insert(agent);
        debug!(%id, x = position.x, y = position.y, "agent spawned");
        Ok(id)
    }

    /// Insert a fully specified agent.
    pub fn insert_agent(&mut self, agent: Agent) -> Result<AgentId, SpawnError> {
        if agent.beacon.index() >= self.beacons.len() {
            return Err(SpawnError::UnknownBeacon {
                beacon: agent.beacon,
                count: self.beacons.len(),
            });
        }
        if !agent.is_finite() {
            return Err(SpawnError::NonFinite);
        }
        let id = self.population.insert(agent);
        debug!(%id, "agent inserted");
        Ok(id)
    }

    /// Remove an agent immediately. Returns `None` for a stale id.
    pub fn remove_agent(&mut self, id: AgentId) -> Option<Agent> {
        let removed = self.population.remove(id);
        if removed.is_some() {
            debug!(%id, "agent removed");
        }
        removed
    }

    /// Look up a live agent.
    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.population.get(id)
    }

    /// The live population.
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// The beacon set.
    pub fn beacons(&self) -> &[Beacon] {
        &self.beacons
    }

    /// Hue of a beacon, if it exists.
    pub fn beacon_hue(&self, id: BeaconId) -> Option<f64> {
        self.hues.get(id.index()).copied()
    }

    /// Parameters in effect for the current tick.
    pub fn params(&self) -> &FlockParams {
        &self.params
    }

    /// Parameters staged for the next tick, if any.
    pub fn staged_params(&self) -> Option<&FlockParams> {
        self.staged.as_ref()
    }

    /// Domain bounds.
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Driver invocations completed.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Simulated time, counted in sub-steps.
    pub fn time(&self) -> TickId {
        self.time
    }

    /// Sub-steps per tick.
    pub fn sub_steps(&self) -> u32 {
        self.sub_steps
    }

    /// The world's seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Metrics from the most recent tick.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }
}

impl fmt::Debug for FlockWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlockWorld")
            .field("ticks", &self.ticks)
            .field("time", &self.time)
            .field("seed", &self.seed)
            .field("population", &self.population.len())
            .field("beacons", &self.beacons.len())
            .field("accumulation", &self.accumulation)
            .field("staged", &self.staged.is_some())
            .finish()
    }
}

/// Draw a new agent at `position`: beacon first, then heading, speed
/// factor and tint.
fn draw_agent<R: Rng + ?Sized>(
    position: DVec2,
    hues: &[f64],
    params: &FlockParams,
    rng: &mut R,
) -> Agent {
    let index = rng.gen_range(0..hues.len());
    let beacon = BeaconId(u32::try_from(index).expect("beacon count validated"));
    Agent::spawn(position, beacon, hues[index], params, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flock_beacon::{OrbitBeacon, PathBeacon};
    use std::f64::consts::PI;

    fn parked(at: DVec2) -> Beacon {
        PathBeacon::new(vec![at, at + DVec2::new(1.0, 0.0)], 0.0)
            .unwrap()
            .into()
    }

    fn quiet_config(agent_count: usize) -> WorldConfig {
        let mut cfg = WorldConfig::with_beacons(1, vec![parked(DVec2::ZERO)]);
        cfg.agent_count = agent_count;
        cfg.params.beacon_speed = 0.0;
        cfg.params.reposition_probability = 0.0;
        cfg
    }

    #[test]
    fn new_spawns_configured_population_inside_bounds() {
        let world = FlockWorld::new(WorldConfig::reference(3)).unwrap();
        assert_eq!(world.population().len(), 50);
        for (_, a) in world.population().iter() {
            assert!(world.bounds().contains(a.position()));
            assert!(a.beacon().index() < world.beacons().len());
        }
    }

    #[test]
    fn new_rejects_invalid_config() {
        let mut cfg = quiet_config(1);
        cfg.sub_steps = 0;
        assert!(matches!(
            FlockWorld::new(cfg),
            Err(ConfigError::ZeroSubSteps)
        ));
    }

    #[test]
    fn tick_advances_clock_by_sub_steps() {
        let mut world = FlockWorld::new(quiet_config(5)).unwrap();
        let m = world.tick();
        assert_eq!(world.ticks(), 1);
        assert_eq!(world.time(), TickId(2));
        assert_eq!(m.sub_steps, 2);
        assert_eq!(m.population, 5);
        assert_eq!(world.last_metrics(), &m);
    }

    #[test]
    fn staged_configuration_waits_for_next_tick() {
        let mut world = FlockWorld::new(quiet_config(3)).unwrap();
        world
            .set_configuration([(ParamKey::LookRadius, 55.0)])
            .unwrap();
        assert_eq!(world.params().look_radius, 20.0);
        assert_eq!(world.staged_params().unwrap().look_radius, 55.0);
        world.tick();
        assert_eq!(world.params().look_radius, 55.0);
        assert!(world.staged_params().is_none());
    }

    #[test]
    fn staged_updates_stack() {
        let mut world = FlockWorld::new(quiet_config(3)).unwrap();
        world.set_configuration([(ParamKey::LookRadius, 55.0)]).unwrap();
        world.set_configuration([(ParamKey::AvoidRadius, 5.0)]).unwrap();
        world.tick();
        assert_eq!(world.params().look_radius, 55.0);
        assert_eq!(world.params().avoid_radius, 5.0);
    }

    #[test]
    fn invalid_configuration_is_rejected_whole() {
        let mut world = FlockWorld::new(quiet_config(3)).unwrap();
        let err = world
            .set_configuration([(ParamKey::LookRadius, 55.0), (ParamKey::ViewAngle, 10.0)])
            .unwrap_err();
        assert!(matches!(err, ParamError::OutOfRange { .. }));
        assert!(world.staged_params().is_none());
        world.tick();
        assert_eq!(world.params().look_radius, 20.0);
    }

    #[test]
    fn spawn_and_remove_take_effect_immediately() {
        let mut world = FlockWorld::new(quiet_config(2)).unwrap();
        let id = world.spawn_agent(DVec2::new(3.0, 4.0)).unwrap();
        assert_eq!(world.population().len(), 3);
        assert_eq!(world.agent(id).unwrap().position(), DVec2::new(3.0, 4.0));
        assert!(world.remove_agent(id).is_some());
        assert!(world.remove_agent(id).is_none());
        assert_eq!(world.population().len(), 2);
        assert_eq!(
            world.spawn_agent(DVec2::new(f64::NAN, 0.0)),
            Err(SpawnError::NonFinite)
        );
    }

    #[test]
    fn insert_agent_checks_beacon() {
        let mut world = FlockWorld::new(quiet_config(0)).unwrap();
        let tint = Hsl {
            hue: 0.0,
            saturation: 50.0,
            lightness: 80.0,
        };
        let stray = Agent::new(DVec2::ZERO, 0.0, 0.9, BeaconId(4), tint, world.params());
        assert!(matches!(
            world.insert_agent(stray),
            Err(SpawnError::UnknownBeacon { count: 1, .. })
        ));
        let ok = Agent::new(DVec2::ZERO, PI, 0.9, BeaconId(0), tint, world.params());
        assert!(world.insert_agent(ok).is_ok());
    }

    #[test]
    fn empty_world_ticks_without_steering() {
        let mut world = FlockWorld::new(quiet_config(0)).unwrap();
        let m = world.tick();
        assert_eq!(m.population, 0);
        assert_eq!(m.mean_neighbours, 0.0);
        assert!(world.snapshot().agents.is_empty());
    }

    #[test]
    fn snapshot_reports_beacons_at_current_time() {
        let orbit = OrbitBeacon::new(DVec2::ZERO, 10.0).unwrap();
        let mut cfg = WorldConfig::with_beacons(0, vec![orbit.clone().into()]);
        cfg.agent_count = 1;
        let mut world = FlockWorld::new(cfg).unwrap();
        world.tick();
        let snap = world.snapshot();
        assert_eq!(snap.time, TickId(2));
        assert_eq!(snap.beacons.len(), 1);
        assert_eq!(snap.beacons[0].hue, 0.0);
        assert_eq!(
            snap.beacons[0].position,
            orbit.position(2.0, world.params())
        );
    }

    #[test]
    fn snapshot_serializes() {
        let mut world = FlockWorld::new(quiet_config(4)).unwrap();
        world.tick();
        let snap = world.snapshot();
        let json = serde_json::to_string(&snap).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.agents.len(), 4);
        assert_eq!(back.time, snap.time);
    }

    #[test]
    fn debug_is_compact() {
        let world = FlockWorld::new(quiet_config(2)).unwrap();
        let s = format!("{world:?}");
        assert!(s.contains("population: 2"));
        assert!(s.contains("seed: 1"));
    }
}
