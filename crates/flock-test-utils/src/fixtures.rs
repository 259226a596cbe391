//! Reusable beacons, shapes and parameter sets.
//!
//! - [`parked_beacon`]: a beacon that never moves while `BEACON_SPEED` is 0.
//! - [`two_vertex_graph`]: the smallest valid graph; each vertex's only
//!   neighbour is the other.
//! - [`quiet_params`] / [`cohesion_only_params`]: parameter sets with
//!   churn and unwanted forces switched off.

use flock_beacon::{Beacon, Graph, PathBeacon};
use flock_core::{DVec2, FlockParams};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::f64::consts::PI;

/// Deterministic random stream for tests.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// A path beacon sitting on `at`.
///
/// Pair with [`quiet_params`] (or any snapshot with `beacon_speed == 0`)
/// and it reports exactly `at` for every `t`.
pub fn parked_beacon(at: DVec2) -> Beacon {
    PathBeacon::new(vec![at, at + DVec2::new(1.0, 0.0)], 0.0)
        .expect("two distinct vertices form a valid path")
        .into()
}

/// Vertices `(0, 0)` and `(10, 0)`, joined by one edge.
pub fn two_vertex_graph() -> Graph {
    Graph::new(
        vec![DVec2::new(0.0, 0.0), DVec2::new(10.0, 0.0)],
        [[1usize], [0]],
    )
    .expect("two-vertex graph is valid")
}

/// Reference parameters with churn off and beacons stopped.
pub fn quiet_params() -> FlockParams {
    FlockParams {
        beacon_speed: 0.0,
        reposition_probability: 0.0,
        ..FlockParams::default()
    }
}

/// Only cohesion acts: wide omnidirectional sensing, no separation,
/// no alignment, no beacon pull, no churn.
pub fn cohesion_only_params() -> FlockParams {
    FlockParams {
        look_radius: 100.0,
        view_angle: PI,
        avoid_radius: 0.0,
        steer_strength: 0.0,
        beacon_strength: 0.0,
        ..quiet_params()
    }
}
