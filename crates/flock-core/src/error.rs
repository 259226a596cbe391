//! Error types for parameter handling.

use crate::params::ParamKey;
use std::error::Error;
use std::fmt;

/// Errors from validating or naming simulation parameters.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamError {
    /// The value is NaN or infinite.
    NonFinite {
        /// The offending parameter.
        key: ParamKey,
        /// The rejected value.
        value: f64,
    },
    /// The value lies outside the parameter's contract range.
    OutOfRange {
        /// The offending parameter.
        key: ParamKey,
        /// The rejected value.
        value: f64,
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
    },
    /// No parameter has the given name.
    UnknownKey {
        /// The name that failed to parse.
        name: String,
    },
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { key, value } => {
                write!(f, "{key} must be finite, got {value}")
            }
            Self::OutOfRange {
                key,
                value,
                min,
                max,
            } => write!(f, "{key} must be in [{min}, {max}], got {value}"),
            Self::UnknownKey { name } => write!(f, "unknown parameter '{name}'"),
        }
    }
}

impl Error for ParamError {}
