//! Ready-made graphs, paths and beacon sets.
//!
//! Coordinates are in the same millimetre space as the default
//! [`Bounds`](flock_core::Bounds) sheet, centred on the origin.

use crate::beacon::Beacon;
use crate::error::BeaconError;
use crate::graph::Graph;
use crate::path::PathBeacon;
use crate::walker::GraphBeacon;
use glam::DVec2;
use rand::Rng;
use std::f64::consts::{FRAC_1_SQRT_2, TAU};
use std::sync::Arc;

/// Number of beacons in the default layout.
pub const DEFAULT_BEACON_COUNT: usize = 10;

/// A cube drawn in oblique projection: an inner square, an outer
/// square pushed out along the diagonals, and the edges between them.
pub fn cube_graph() -> Graph {
    let z = FRAC_1_SQRT_2;
    let vertices = [
        (-1.0, 1.0),
        (-1.0, -1.0),
        (1.0, -1.0),
        (1.0, 1.0),
        (1.0 + z, 1.0 + z),
        (1.0 + z, -1.0 - z),
        (-1.0 - z, -1.0 - z),
        (-1.0 - z, 1.0 + z),
    ]
    .into_iter()
    .map(|(x, y)| DVec2::new(x * 30.0, y * 30.0))
    .collect();
    let adjacency: &[&[usize]] = &[
        &[1, 3, 7],
        &[0, 2, 6],
        &[1, 3, 5],
        &[0, 2, 4],
        &[7, 3, 5],
        &[2, 4, 6],
        &[1, 5, 7],
        &[0, 4, 6],
    ];
    Graph::new(vertices, adjacency).expect("cube preset is well-formed")
}

/// The Herschel graph: 11 vertices, 18 edges, bipartite and
/// non-Hamiltonian, laid out to fill a landscape sheet.
pub fn herschel_graph() -> Graph {
    let vertices = [
        (0.0, -2.0),
        (-1.0, -0.5),
        (1.0, -0.5),
        (-3.0, 0.0),
        (-2.0, 0.0),
        (0.0, 0.0),
        (2.0, 0.0),
        (3.0, 0.0),
        (-1.0, 0.5),
        (1.0, 0.5),
        (0.0, 2.0),
    ]
    .into_iter()
    .map(|(x, y)| DVec2::new(x * 45.0, y * 50.0))
    .collect();
    let adjacency: &[&[usize]] = &[
        &[1, 2, 3, 7],
        &[0, 4, 5],
        &[0, 5, 6],
        &[0, 4, 10],
        &[1, 3, 8],
        &[1, 2, 8, 9],
        &[2, 7, 9],
        &[0, 6, 10],
        &[4, 5, 10],
        &[5, 6, 10],
        &[3, 7, 8, 9],
    ];
    Graph::new(vertices, adjacency).expect("herschel preset is well-formed")
}

/// A closed path over a hexagon of radius 80 and its centre, tracing
/// the outline and two chords through the middle.
pub fn hexagon_star_path() -> Vec<DVec2> {
    let mut poly: Vec<DVec2> = (0..6)
        .map(|i| {
            let angle = TAU * i as f64 / 6.0;
            80.0 * DVec2::new(angle.cos(), angle.sin())
        })
        .collect();
    poly.push(DVec2::ZERO);
    [0, 1, 2, 6, 4, 5, 0, 6, 2, 3, 4, 6]
        .into_iter()
        .map(|i| poly[i])
        .collect()
}

/// Axis-aligned rectangle centred on the origin, walked counter-clockwise
/// from the lower-left corner.
pub fn rectangle_path(width: f64, height: f64) -> Vec<DVec2> {
    let (hw, hh) = (width / 2.0, height / 2.0);
    vec![
        DVec2::new(-hw, -hh),
        DVec2::new(hw, -hh),
        DVec2::new(hw, hh),
        DVec2::new(-hw, hh),
    ]
}

/// `count` independent walkers sharing one graph.
pub fn graph_walkers<R: Rng + ?Sized>(graph: Graph, count: usize, rng: &mut R) -> Vec<Beacon> {
    let graph = Arc::new(graph);
    (0..count)
        .map(|_| GraphBeacon::new(Arc::clone(&graph), rng).into())
        .collect()
}

/// `count` beacons on one closed path, each with a random phase.
pub fn path_walkers<R: Rng + ?Sized>(
    path: &[DVec2],
    count: usize,
    rng: &mut R,
) -> Result<Vec<Beacon>, BeaconError> {
    (0..count)
        .map(|_| PathBeacon::new(path.to_vec(), rng.gen::<f64>()).map(Beacon::from))
        .collect()
}

/// The default layout: [`DEFAULT_BEACON_COUNT`] walkers on the Herschel graph.
pub fn default_beacons<R: Rng + ?Sized>(rng: &mut R) -> Vec<Beacon> {
    graph_walkers(herschel_graph(), DEFAULT_BEACON_COUNT, rng)
}
