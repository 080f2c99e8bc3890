//! # Application Configuration
//!
//! TOML configuration shared by all frontends. Missing files fall back to
//! defaults; malformed files are an error so typos are not silently ignored.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::errors::AppError;

/// Default tracing filter when neither `RUST_LOG` nor config sets one
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Target platform family.
///
/// Decides presentation chrome that differs between form factors, e.g.
/// whether leaf screens get a navigation header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Desktop window or terminal
    Desktop,
    /// Phone-sized frontend with a navigation header
    Mobile,
}

impl Platform {
    /// Platform this build targets when nothing else is configured
    #[must_use]
    pub fn compiled() -> Self {
        cfg_if::cfg_if! {
            if #[cfg(feature = "mobile")] {
                Platform::Mobile
            } else {
                Platform::Desktop
            }
        }
    }

    /// Check if screens on this platform need a navigation header
    #[must_use]
    pub fn needs_header(&self) -> bool {
        matches!(self, Self::Mobile)
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::compiled()
    }
}

/// Application configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Platform family used to pick presentation chrome
    pub platform: Platform,
    /// Tracing filter directive, e.g. `"info"` or `"cinder_app=debug"`
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            platform: Platform::default(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    /// Parse configuration from a TOML string
    pub fn from_toml(contents: &str, origin: &Path) -> Result<Self, AppError> {
        toml::from_str(contents).map_err(|e| AppError::ConfigParse {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load configuration from `path`, or defaults if the file doesn't exist
    pub fn load(path: &Path) -> Result<Self, AppError> {
        match fs::read_to_string(path) {
            Ok(contents) => Self::from_toml(&contents, path),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(AppError::ConfigRead {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
        }
    }

    /// Serialize to pretty TOML
    pub fn to_toml(&self) -> String {
        // AppConfig only holds strings and unit enums, which always serialize
        toml::to_string_pretty(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.platform, Platform::compiled());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = AppConfig::from_toml("platform = \"mobile\"", Path::new("x.toml"))
            .expect("valid config");
        assert_eq!(config.platform, Platform::Mobile);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_unknown_platform_is_rejected() {
        let err = AppConfig::from_toml("platform = \"watch\"", Path::new("x.toml"))
            .expect_err("unknown platform");
        assert!(err.is_config());
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig {
            platform: Platform::Mobile,
            log_level: "debug".to_string(),
        };
        let parsed = AppConfig::from_toml(&config.to_toml(), Path::new("x.toml"))
            .expect("round trip");
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = AppConfig::load(&dir.path().join("absent.toml")).expect("defaults");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_reads_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "log_level = \"warn\"\n").expect("write config");

        let config = AppConfig::load(&path).expect("valid config");
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_load_reports_parse_errors_with_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "platform = [").expect("write config");

        let err = AppConfig::load(&path).expect_err("broken toml");
        assert!(matches!(&err, AppError::ConfigParse { path: p, .. } if p == &path));
    }

    #[test]
    fn test_only_mobile_needs_header() {
        assert!(Platform::Mobile.needs_header());
        assert!(!Platform::Desktop.needs_header());
    }
}
