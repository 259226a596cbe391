//! Simulation engine for the Flock simulation.
//!
//! Owns the agent population, runs the steering model against the
//! beacon set, applies population churn, and exposes the driver API
//! ([`FlockWorld`]) that renderers and settings panels talk to.
//!
//! # Sub-step order
//!
//! Each [`tick()`](FlockWorld::tick) runs a fixed number of sub-steps.
//! Every sub-step:
//!
//! 1. advances the clock by one unit;
//! 2. rolls for churn and, on a hit, queues one removal and one spawn;
//! 3. steers every live agent against the current beacon positions,
//!    reading neighbours from a frame captured before anyone moved;
//! 4. advances every beacon;
//! 5. commits queued population edits at the barrier.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod agent;
pub mod churn;
pub mod config;
pub mod metrics;
pub mod population;
pub mod snapshot;
pub mod steering;
pub mod world;

pub use agent::Agent;
pub use config::{ConfigError, WorldConfig};
pub use metrics::StepMetrics;
pub use population::Population;
pub use snapshot::{AgentView, BeaconView, Snapshot};
pub use steering::ForceAccumulation;
pub use world::{FlockWorld, SpawnError};
