//! Application errors
//!
//! The binding layer has almost nothing that can fail: the only runtime
//! failure is a route that does not carry the parameters its screen needs.
//! The remaining variants cover configuration loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the headless core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// A route entry is missing a parameter its screen requires
    #[error("Missing route parameter: {name}")]
    MissingRouteParam {
        /// Parameter name that was looked up
        name: String,
    },

    /// A string could not be parsed as a file-system path
    #[error("Invalid path {value:?}: {reason}")]
    InvalidPath {
        /// The rejected input
        value: String,
        /// Why it was rejected
        reason: &'static str,
    },

    /// The configuration file could not be read
    #[error("Failed to read config {path}: {message}")]
    ConfigRead {
        /// Config file location
        path: PathBuf,
        /// Underlying I/O error
        message: String,
    },

    /// The configuration file is not valid TOML for [`crate::AppConfig`]
    #[error("Failed to parse config {path}: {message}")]
    ConfigParse {
        /// Config file location
        path: PathBuf,
        /// Parser error
        message: String,
    },
}

impl AppError {
    /// Create a missing route parameter error
    pub fn missing_param(name: impl Into<String>) -> Self {
        Self::MissingRouteParam { name: name.into() }
    }

    /// Create an invalid path error
    pub fn invalid_path(value: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidPath {
            value: value.into(),
            reason,
        }
    }

    /// Check if the error comes from configuration loading
    #[must_use]
    pub fn is_config(&self) -> bool {
        matches!(self, Self::ConfigRead { .. } | Self::ConfigParse { .. })
    }
}
