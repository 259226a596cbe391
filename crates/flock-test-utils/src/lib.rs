//! Test fixtures for Flock development.
//!
//! Seeded random streams, beacons that stay put, a small graph with
//! known geometry, and parameter sets that switch off the terms a test
//! does not care about.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    cohesion_only_params, parked_beacon, quiet_params, seeded_rng, two_vertex_graph,
};

use flock_core::DVec2;

/// Assert two points are within `tol` of each other.
#[track_caller]
pub fn assert_near(a: DVec2, b: DVec2, tol: f64) {
    let d = a.distance(b);
    assert!(d <= tol, "{a} and {b} are {d} apart (tolerance {tol})");
}
