//! Rendering-side collaborators for the Flock simulation.
//!
//! Nothing here feeds back into the simulation except
//! [`SettingsStore::apply_to`], which goes through the world's public
//! configuration API like any other caller.
//!
//! | Module | Role |
//! |--------|------|
//! | [`trail`] | Bounded per-agent position history. |
//! | [`svg`] | Static vector export of a snapshot and its trails. |
//! | [`settings`] | Clamped, persisted parameter values. |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod settings;
pub mod svg;
pub mod trail;

pub use settings::{SettingsError, SettingsStore};
pub use svg::{ExportError, SvgExporter};
pub use trail::TrailBook;
