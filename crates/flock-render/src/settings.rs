//! User-facing parameter values with clamping and JSON persistence.
//!
//! The store sits between raw user input and the world. Every value is
//! clamped into its key's control range before it is stored, so
//! anything the store pushes into a [`FlockWorld`] already satisfies the
//! core's contract.
//!
//! The persisted form is a flat JSON object keyed by canonical parameter
//! name. Restoring ignores unknown keys and non-numeric values, which
//! lets settings written by older or newer builds load cleanly.

use std::error::Error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use flock_core::{FlockParams, ParamError, ParamKey};
use flock_engine::FlockWorld;
use indexmap::IndexMap;
use serde_json::{Map, Value};
use tracing::{info, warn};

// ── SettingsError ──────────────────────────────────────────────────

/// Errors from reading, writing or applying settings.
#[derive(Debug)]
pub enum SettingsError {
    /// Reading or writing the settings file failed.
    Io {
        /// File involved.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },
    /// The settings text is not valid JSON.
    Parse(serde_json::Error),
    /// The settings JSON is valid but not an object.
    NotAnObject,
    /// A named key does not exist, or the world rejected the values.
    Param(ParamError),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Parse(e) => write!(f, "settings JSON: {e}"),
            Self::NotAnObject => write!(f, "settings JSON must be an object"),
            Self::Param(e) => write!(f, "parameter: {e}"),
        }
    }
}

impl Error for SettingsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(e) => Some(e),
            Self::Param(e) => Some(e),
            Self::NotAnObject => None,
        }
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

impl From<ParamError> for SettingsError {
    fn from(e: ParamError) -> Self {
        Self::Param(e)
    }
}

// ── SettingsStore ──────────────────────────────────────────────────

/// One clamped value per [`ParamKey`], in canonical order.
#[derive(Clone, Debug, PartialEq)]
pub struct SettingsStore {
    values: IndexMap<ParamKey, f64>,
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self {
            values: ParamKey::ALL
                .into_iter()
                .map(|k| (k, k.default_value()))
                .collect(),
        }
    }
}

impl SettingsStore {
    /// Store holding the reference defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value for `key`.
    pub fn get(&self, key: ParamKey) -> f64 {
        self.values
            .get(&key)
            .copied()
            .unwrap_or_else(|| key.default_value())
    }

    /// Store user input for `key`, returning the value actually kept.
    ///
    /// Input is clamped into the control range and integer keys are
    /// rounded. Non-finite input is rejected and the previous value kept.
    pub fn set(&mut self, key: ParamKey, raw: f64) -> f64 {
        if !raw.is_finite() {
            warn!(key = %key, raw, "ignoring non-finite setting");
            return self.get(key);
        }
        let rounded = if key.is_integer() { raw.round() } else { raw };
        let value = key.control_range().clamp(rounded);
        if value != raw {
            warn!(key = %key, raw, value, "setting clamped");
        }
        self.values.insert(key, value);
        value
    }

    /// [`set`](Self::set) by canonical name.
    pub fn set_by_name(&mut self, name: &str, raw: f64) -> Result<f64, SettingsError> {
        let key: ParamKey = name.parse()?;
        Ok(self.set(key, raw))
    }

    /// `(key, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (ParamKey, f64)> + '_ {
        self.values.iter().map(|(&k, &v)| (k, v))
    }

    /// The stored values as a parameter snapshot.
    pub fn params(&self) -> FlockParams {
        let mut params = FlockParams::default();
        for (key, value) in self.iter() {
            params.set(key, value);
        }
        params
    }

    /// Stage every stored value on `world` for its next tick.
    pub fn apply_to(&self, world: &mut FlockWorld) -> Result<(), SettingsError> {
        world.set_configuration(self.iter())?;
        Ok(())
    }

    // ── Persistence ────────────────────────────────────────────────

    /// Serialize as a JSON object keyed by parameter name.
    pub fn to_json(&self) -> String {
        Value::Object(params_object(self.iter())).to_string()
    }

    /// Merge values from a JSON object into the store.
    ///
    /// Known numeric keys go through [`set`](Self::set). Unknown keys
    /// and non-numeric values are skipped with a warning. Returns the
    /// number of values applied.
    pub fn restore_json(&mut self, json: &str) -> Result<usize, SettingsError> {
        let value: Value = serde_json::from_str(json)?;
        let Value::Object(map) = value else {
            return Err(SettingsError::NotAnObject);
        };
        let mut applied = 0;
        for (name, raw) in map {
            let Ok(key) = name.parse::<ParamKey>() else {
                warn!(name = %name, "ignoring unknown setting");
                continue;
            };
            let Some(raw) = raw.as_f64() else {
                warn!(key = %key, value = %raw, "ignoring non-numeric setting");
                continue;
            };
            self.set(key, raw);
            applied += 1;
        }
        Ok(applied)
    }

    /// Build a store from defaults overlaid with a JSON object.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let mut store = Self::default();
        store.restore_json(json)?;
        Ok(store)
    }

    /// Write the store to `path`, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        let io_err = |source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        std::fs::write(path, self.to_json()).map_err(io_err)?;
        info!(path = %path.display(), "settings saved");
        Ok(())
    }

    /// Read a store from `path`. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(path = %path.display(), "no saved settings, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(SettingsError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        let store = Self::from_json(&json)?;
        info!(path = %path.display(), "settings loaded");
        Ok(store)
    }
}

/// JSON object of `(name, value)` pairs in iteration order.
pub fn params_object(values: impl IntoIterator<Item = (ParamKey, f64)>) -> Map<String, Value> {
    values
        .into_iter()
        .map(|(k, v)| (k.name().to_string(), Value::from(v)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn defaults_match_reference_values() {
        let store = SettingsStore::new();
        assert_eq!(store.params(), FlockParams::default());
        assert_eq!(store.iter().count(), ParamKey::ALL.len());
    }

    #[test]
    fn set_clamps_into_control_range() {
        let mut store = SettingsStore::new();
        assert_eq!(store.set(ParamKey::ViewAngle, 5.0), PI);
        assert_eq!(store.set(ParamKey::MaxSpeed, -1.0), 0.0);
        assert_eq!(store.set(ParamKey::RepositionProbability, 0.5), 0.01);
        assert_eq!(store.set(ParamKey::AvoidStrength, 12.5), 12.5);
    }

    #[test]
    fn set_rounds_trail_length() {
        let mut store = SettingsStore::new();
        assert_eq!(store.set(ParamKey::TrailLength, 120.6), 121.0);
    }

    #[test]
    fn set_rejects_non_finite() {
        let mut store = SettingsStore::new();
        store.set(ParamKey::LookRadius, 42.0);
        assert_eq!(store.set(ParamKey::LookRadius, f64::NAN), 42.0);
        assert_eq!(store.set(ParamKey::CloseStrength, f64::INFINITY), 0.01);
    }

    #[test]
    fn set_by_name_rejects_unknown() {
        let mut store = SettingsStore::new();
        assert_eq!(store.set_by_name("LOOK_RADIUS", 30.0).unwrap(), 30.0);
        assert!(matches!(
            store.set_by_name("WARP_FACTOR", 9.0),
            Err(SettingsError::Param(ParamError::UnknownKey { .. }))
        ));
    }

    #[test]
    fn json_keeps_every_key_by_name() {
        let mut store = SettingsStore::new();
        store.set(ParamKey::LookRadius, 33.0);
        let value: Value = serde_json::from_str(&store.to_json()).unwrap();
        let map = value.as_object().unwrap();
        assert_eq!(map.len(), 12);
        assert_eq!(map["LOOK_RADIUS"], Value::from(33.0));
        assert_eq!(SettingsStore::from_json(&store.to_json()).unwrap(), store);
    }

    #[test]
    fn restore_skips_unknown_and_non_numeric() {
        let mut store = SettingsStore::new();
        let applied = store
            .restore_json(r#"{"LOOK_RADIUS": 40, "COLOUR": "red", "TURN_SPEED": "fast", "VIEW_ANGLE": 9}"#)
            .unwrap();
        assert_eq!(applied, 2);
        assert_eq!(store.get(ParamKey::LookRadius), 40.0);
        assert_eq!(store.get(ParamKey::ViewAngle), PI);
        assert_eq!(store.get(ParamKey::TurnSpeed), 0.1);
    }

    #[test]
    fn restore_rejects_non_objects() {
        let mut store = SettingsStore::new();
        assert!(matches!(
            store.restore_json("[1, 2]"),
            Err(SettingsError::NotAnObject)
        ));
        assert!(matches!(
            store.restore_json("{"),
            Err(SettingsError::Parse(_))
        ));
    }
}
