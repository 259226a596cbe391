//! Core types and parameters for the Flock simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental vocabulary shared by the rest of the workspace:
//! identifiers, the named parameter set read once per tick, domain
//! bounds, angle arithmetic, display tints, and error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod angle;
pub mod color;
pub mod error;
pub mod geometry;
pub mod id;
pub mod params;

pub use angle::{angle_diff, wrap_angle};
pub use color::Hsl;
pub use error::ParamError;
pub use geometry::{BoundaryEdge, Bounds};
pub use glam::DVec2;
pub use id::{AgentId, BeaconId, TickId};
pub use params::{FlockParams, ParamKey, ParamRange};
