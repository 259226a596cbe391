//! Benchmark profiles for the Flock simulation.
//!
//! Provides pre-built [`WorldConfig`] profiles for benchmarks and demos:
//!
//! - [`reference_profile`]: the stock 50-agent world on ten Herschel walkers
//! - [`crowd_profile`]: the same beacon layout with a custom head count
//! - [`mixed_beacons`]: one beacon of every trajectory kind

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use flock_beacon::{presets, Beacon, OrbitBeacon};
use flock_core::DVec2;
use flock_engine::WorldConfig;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// The stock world: 50 agents, two sub-steps per tick.
pub fn reference_profile(seed: u64) -> WorldConfig {
    WorldConfig::reference(seed)
}

/// The stock beacon layout with `agent_count` agents.
///
/// Sensing is all-pairs, so tick cost grows with the square of the
/// head count.
pub fn crowd_profile(agent_count: usize, seed: u64) -> WorldConfig {
    let mut cfg = WorldConfig::reference(seed);
    cfg.agent_count = agent_count;
    cfg
}

/// Orbit, closed-path and graph-walk beacons side by side.
pub fn mixed_beacons(seed: u64) -> Vec<Beacon> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut beacons: Vec<Beacon> = vec![OrbitBeacon::new(DVec2::new(-60.0, 0.0), 30.0)
        .unwrap()
        .into()];
    beacons.extend(presets::path_walkers(&presets::hexagon_star_path(), 3, &mut rng).unwrap());
    beacons.extend(presets::graph_walkers(presets::cube_graph(), 3, &mut rng));
    beacons
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_validate() {
        assert!(reference_profile(1).validate().is_ok());
        let crowd = crowd_profile(400, 1);
        assert!(crowd.validate().is_ok());
        assert_eq!(crowd.agent_count, 400);
    }

    #[test]
    fn mixed_set_has_every_kind() {
        let kinds: Vec<&str> = mixed_beacons(3).iter().map(Beacon::kind).collect();
        for kind in ["orbit", "path", "graph"] {
            assert!(kinds.contains(&kind), "missing {kind}");
        }
    }
}
