//! Beacon trajectories for the Flock simulation.
//!
//! A beacon is a moving target that pulls on the agents assigned to it.
//! Its motion is deterministic given its construction and the stream of
//! edge choices, and never depends on the agents. This crate defines the
//! [`Trajectory`] capability and the three providers behind the
//! [`Beacon`] tagged union.
//!
//! # Providers
//!
//! - [`OrbitBeacon`]: circles a fixed centre; stateless.
//! - [`PathBeacon`]: traverses a closed polyline driven by time alone.
//! - [`GraphBeacon`]: random walk along the edges of a [`Graph`].
//!
//! Ready-made shapes live in [`presets`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod beacon;
pub mod error;
pub mod graph;
pub mod orbit;
pub mod path;
pub mod presets;
pub mod walker;

#[cfg(test)]
pub(crate) mod compliance;

pub use beacon::{Beacon, Trajectory};
pub use error::BeaconError;
pub use graph::Graph;
pub use orbit::OrbitBeacon;
pub use path::PathBeacon;
pub use walker::GraphBeacon;
