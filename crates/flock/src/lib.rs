//! Flock: agents that steer as a flock while chasing moving beacons.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Flock sub-crates. For most users, adding `flock` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use flock::prelude::*;
//!
//! let mut world = FlockWorld::new(WorldConfig::reference(42)).unwrap();
//! let mut trails = TrailBook::new();
//! for _ in 0..10 {
//!     world.tick();
//!     trails.record(&world.snapshot());
//! }
//!
//! // Settings changes are staged and take effect on the next tick.
//! world
//!     .set_configuration([(ParamKey::LookRadius, 40.0)])
//!     .unwrap();
//! world.tick();
//! assert_eq!(world.params().look_radius, 40.0);
//!
//! let snapshot = world.snapshot();
//! assert_eq!(snapshot.agents.len(), 50);
//! let svg = SvgExporter::new(*world.bounds())
//!     .render(&snapshot, &trails)
//!     .unwrap();
//! assert!(svg.starts_with("<svg"));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `flock-core` | IDs, parameters, bounds, angles, colours |
//! | [`beacon`] | `flock-beacon` | Orbit, closed-path and graph-walk trajectories |
//! | [`engine`] | `flock-engine` | Steering, population, churn and the driver |
//! | [`render`] | `flock-render` | Trails, SVG export and persisted settings |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, parameters, and IDs (`flock-core`).
///
/// Contains [`types::FlockParams`] and its [`types::ParamKey`]s, the
/// domain [`types::Bounds`], and the angle helpers every other crate
/// builds on.
pub use flock_core as types;

/// Beacon trajectories (`flock-beacon`).
///
/// The [`beacon::Trajectory`] trait, the [`beacon::Beacon`] union over
/// its three providers, and ready-made shapes in [`beacon::presets`].
pub use flock_beacon as beacon;

/// Simulation engine (`flock-engine`).
///
/// [`engine::FlockWorld`] drives ticks, churn and configuration changes
/// and hands out owned [`engine::Snapshot`]s.
pub use flock_engine as engine;

/// Trails, export, and settings (`flock-render`).
///
/// [`render::TrailBook`] keeps recent positions, [`render::SvgExporter`]
/// writes them out, and [`render::SettingsStore`] persists parameters.
pub use flock_render as render;

/// Common imports for typical Flock usage.
///
/// ```rust
/// use flock::prelude::*;
/// ```
///
/// This imports the world and its configuration, parameter keys, the
/// beacon types, snapshots, and the render-side collaborators.
pub mod prelude {
    // Core types
    pub use flock_core::{AgentId, BeaconId, Bounds, DVec2, FlockParams, ParamKey, TickId};

    // Errors
    pub use flock_core::ParamError;
    pub use flock_engine::{ConfigError, SpawnError};
    pub use flock_render::{ExportError, SettingsError};

    // Beacons
    pub use flock_beacon::{Beacon, Graph, GraphBeacon, OrbitBeacon, PathBeacon, Trajectory};

    // Engine
    pub use flock_engine::{
        FlockWorld, ForceAccumulation, Snapshot, StepMetrics, WorldConfig,
    };

    // Render
    pub use flock_render::{SettingsStore, SvgExporter, TrailBook};
}
